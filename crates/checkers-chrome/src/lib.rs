//! # Checkers Chrome Driver
//!
//! Concrete [`checkers_interfaces::PageDriver`] backed by a local Chrome
//! instance over CDP (via `chromiumoxide`). Launching and teardown live
//! here; everything game-specific stays in `checkers-page`.

mod config;
mod driver;
mod error;

pub use config::ChromeConfig;
pub use driver::ChromeDriver;
pub use error::ChromeError;
