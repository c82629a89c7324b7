//! Shared outcome codes for local validation and remote calls

use serde::{Deserialize, Serialize};

/// Outcome of a validation or service operation.
///
/// The same vocabulary is used for offline checks ([`RadioModel::validate`])
/// and for the `error` field of every service response, so a caller can
/// handle both paths uniformly. The service may emit codes outside the
/// documented set; those map to [`ErrorCode::Unknown`] rather than failing
/// to parse.
///
/// [`RadioModel::validate`]: crate::RadioModel::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    /// Transport-level failure, no well-formed service response
    ConnectionError,
    /// Operation succeeded
    Success,
    /// Malformed input parameter
    InvalidInput,
    /// Unrecognized command
    InvalidCommand,
    /// Unknown radio model name
    InvalidModel,
    /// Serial number has the wrong length
    InvalidSerialLength,
    /// Serial number does not match the model pattern
    InvalidSerialPattern,
    /// Serial number is valid but not supported by the calculator
    InvalidSerialUnsupported,
    /// Extra data has the wrong length
    InvalidExtraLength,
    /// Extra data does not match the model pattern
    InvalidExtraPattern,
    /// Missing, invalid or expired activation key
    InvalidLicense,
    /// Code reported by the service but not part of the documented set
    Unknown(i32),
}

impl ErrorCode {
    /// Numeric wire value of this code.
    pub fn code(self) -> i32 {
        match self {
            ErrorCode::ConnectionError => -1,
            ErrorCode::Success => 0,
            ErrorCode::InvalidInput => 1,
            ErrorCode::InvalidCommand => 2,
            ErrorCode::InvalidModel => 3,
            ErrorCode::InvalidSerialLength => 4,
            ErrorCode::InvalidSerialPattern => 5,
            ErrorCode::InvalidSerialUnsupported => 6,
            ErrorCode::InvalidExtraLength => 7,
            ErrorCode::InvalidExtraPattern => 8,
            ErrorCode::InvalidLicense => 100,
            ErrorCode::Unknown(code) => code,
        }
    }

    /// Map a numeric wire value onto a code.
    ///
    /// Values outside the documented set become [`ErrorCode::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => ErrorCode::ConnectionError,
            0 => ErrorCode::Success,
            1 => ErrorCode::InvalidInput,
            2 => ErrorCode::InvalidCommand,
            3 => ErrorCode::InvalidModel,
            4 => ErrorCode::InvalidSerialLength,
            5 => ErrorCode::InvalidSerialPattern,
            6 => ErrorCode::InvalidSerialUnsupported,
            7 => ErrorCode::InvalidExtraLength,
            8 => ErrorCode::InvalidExtraPattern,
            100 => ErrorCode::InvalidLicense,
            other => ErrorCode::Unknown(other),
        }
    }

    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        ErrorCode::from_code(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ConnectionError => write!(f, "connection error"),
            ErrorCode::Success => write!(f, "success"),
            ErrorCode::InvalidInput => write!(f, "invalid input"),
            ErrorCode::InvalidCommand => write!(f, "invalid command"),
            ErrorCode::InvalidModel => write!(f, "invalid radio model"),
            ErrorCode::InvalidSerialLength => write!(f, "invalid serial length"),
            ErrorCode::InvalidSerialPattern => write!(f, "invalid serial pattern"),
            ErrorCode::InvalidSerialUnsupported => write!(f, "serial not supported"),
            ErrorCode::InvalidExtraLength => write!(f, "invalid extra data length"),
            ErrorCode::InvalidExtraPattern => write!(f, "invalid extra data pattern"),
            ErrorCode::InvalidLicense => write!(f, "invalid license"),
            ErrorCode::Unknown(code) => write!(f, "unknown service error {}", code),
        }
    }
}
