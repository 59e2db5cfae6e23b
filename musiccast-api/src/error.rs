use http_client::HttpError;
use thiserror::Error;

use crate::operation::ValidationError;

/// High-level API errors for MusicCast operations
///
/// Transport failures are carried through untouched so callers see exactly
/// what the HTTP layer reported. The other variants cover problems caught
/// on this side of the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout or non-2xx status from the receiver
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The receiver answered but the body did not match the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A parameter was rejected before any request was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidParameter(error.to_string())
    }
}
