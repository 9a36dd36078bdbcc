use checkers_interfaces::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChromeError {
    #[error("failed to launch Chrome browser: {0}")]
    Launch(String),

    #[error("DevTools protocol error: {0}")]
    Protocol(#[from] chromiumoxide::error::CdpError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<ChromeError> for ApiError {
    fn from(err: ChromeError) -> Self {
        match err {
            ChromeError::Launch(msg) => ApiError::LaunchError(msg),
            ChromeError::Protocol(cdp) => ApiError::Driver(cdp.to_string()),
            ChromeError::Io(io) => ApiError::ConnectionFailed(io.to_string()),
        }
    }
}
