//! The fixed points of the page markup contract.

/// The single text region summarizing game status.
pub(crate) const MESSAGE: &str = "#message";

/// The named control that resets the full board and message state.
pub(crate) const RESTART: &str = r#"[name="restart"]"#;
