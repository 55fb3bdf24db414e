//! File system errors

use std::path::Path;

use super::ClrError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ClrError {
    ClrError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub(crate) fn read_error(path: &Path, e: &std::io::Error) -> ClrError {
    read_failed(path.display().to_string(), e.to_string())
}

pub(crate) fn write_error(path: &Path, e: &std::io::Error) -> ClrError {
    write_failed(path.display().to_string(), e.to_string())
}
