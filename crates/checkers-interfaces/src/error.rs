use thiserror::Error;

/// Errors surfaced to callers of the harness API. These are intended to be
/// transport-agnostic; concrete drivers map their own failures into this
/// taxonomy.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A wait condition never became true within its bounded window. The
    /// condition text names what was being waited for, so a failing scenario
    /// reports exactly which synchronization point was never reached.
    #[error("wait condition not met within {waited_ms}ms: {condition}")]
    Timeout { condition: String, waited_ms: u64 },

    /// No element matched the selector at the time of the interaction.
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },

    /// Failed to establish or maintain a connection to the browser.
    #[error("browser connection failed: {0}")]
    ConnectionFailed(String),

    /// Error related to launching the browser process.
    #[error("failed to launch browser: {0}")]
    LaunchError(String),

    /// The underlying automation transport rejected or failed an operation.
    #[error("driver error: {0}")]
    Driver(String),

    /// An internal error occurred within the harness. This may indicate a bug.
    #[error("internal harness error: {0}")]
    InternalError(String),
}
