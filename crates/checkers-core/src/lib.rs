//! # Checkers Core
//!
//! Ambient infrastructure shared by the harness crates: configuration
//! loading, logging setup, and the bounded polling primitive every wait in
//! the page object is built on.

mod config;
mod error;
mod logging;
mod wait;

pub use self::config::*;
pub use self::error::*;
pub use self::logging::*;
pub use self::wait::*;
