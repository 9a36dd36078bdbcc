//! # Checkers Interfaces (Public API Contract)
//!
//! This crate defines the contract between the checkers page object and the
//! browser-automation transport that carries its interactions. It provides
//! the transport trait (`PageDriver`) and the error taxonomy (`ApiError`)
//! shared by every driver implementation.

mod driver;
mod error;

pub use driver::*;
pub use error::*;
