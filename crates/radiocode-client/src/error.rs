//! Error types for radio code client operations

use radiocode_core::ErrorCode;
use thiserror::Error;

/// Result type alias for radio code client operations
pub type Result<T> = std::result::Result<T, RadioCodeError>;

/// Errors that can occur during radio code client operations.
///
/// Every variant resolves to exactly one [`ErrorCode`] via
/// [`RadioCodeError::code`], mirroring the service's own error vocabulary.
#[derive(Debug, Error)]
pub enum RadioCodeError {
    /// No activation key configured; raised before any network access
    #[error("no activation key configured")]
    MissingLicense,

    /// HTTP request failed at the transport level
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Invalid service URL
    #[error("invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error (test server setup, local sockets)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Response was well-formed HTTP but not a usable service payload
    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    /// Business error reported by the service inside a well-formed response
    #[error("service error: {code}")]
    Api {
        /// The authoritative error code from the response's `error` field
        code: ErrorCode,
        /// The full response payload, verbatim
        payload: serde_json::Value,
    },
}

impl RadioCodeError {
    /// The [`ErrorCode`] this failure resolves to.
    ///
    /// Transport-level failures, including malformed payloads, uniformly
    /// map to [`ErrorCode::ConnectionError`].
    pub fn code(&self) -> ErrorCode {
        match self {
            RadioCodeError::MissingLicense => ErrorCode::InvalidLicense,
            RadioCodeError::Connection(_)
            | RadioCodeError::InvalidUrl(_)
            | RadioCodeError::Io(_)
            | RadioCodeError::MalformedResponse(_) => ErrorCode::ConnectionError,
            RadioCodeError::Api { code, .. } => *code,
        }
    }

    /// Full service payload for business errors, `None` otherwise.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            RadioCodeError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
