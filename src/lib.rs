//! # Checkers E2E Harness
//!
//! This crate ties the harness together and re-exports the pieces a
//! scenario needs: the page object and board vocabulary from
//! `checkers-page`, the Chrome driver from `checkers-chrome`, and the
//! ambient configuration/logging helpers from `checkers-core`.
//!
//! The live scenario suite lives under `tests/`; it drives a real Chrome
//! session against a deployed game and is `#[ignore]`d by default.

// Re-export the API contract
pub use checkers_interfaces::{ApiError, PageDriver};

// Re-export the page object and its vocabulary
pub use checkers_page::{
    BoardScan, CELL_COUNT, CheckersPage, Glyph, Phrase, Space,
};

// Re-export the concrete driver
pub use checkers_chrome::{ChromeConfig, ChromeDriver, ChromeError};

// Re-export ambient helpers for scenario setup
pub use checkers_core::{
    HarnessConfig, WaitSettings, load_config, setup_logging,
};
