//! Configuration errors

use super::ClrError;

/// Creates a settings not found error
pub fn not_found(path: impl Into<String>) -> ClrError {
    ClrError::ConfigNotFound { path: path.into() }
}

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid settings error
pub fn invalid(message: impl Into<String>) -> ClrError {
    ClrError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a settings read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
