use thiserror::Error;

// Re-export for convenience elsewhere
pub use config::ConfigError;

/// Failures of the ambient infrastructure itself (not of the page under
/// observation).
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging setup failed: {0}")]
    LoggingSetup(String),
}
