//! # Checkers Page Object
//!
//! The page-state abstraction for the web checkers game: glyph
//! classification (what image is rendered at a board cell), the board
//! reader (full-board scans into semantic tallies), the game-message
//! vocabulary, and the `CheckersPage` controller that issues clicks and
//! blocks until the animated UI has settled.
//!
//! The controller is generic over [`checkers_interfaces::PageDriver`], so
//! scenarios can run against a live browser or a scripted in-memory driver.

mod board;
mod glyph;
mod message;
mod page;
pub(crate) mod selectors;

pub use board::*;
pub use glyph::*;
pub use message::*;
pub use page::*;
