//! File system errors

use std::path::Path;

use super::FirmkeepError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, reason: impl ToString) -> FirmkeepError {
    FirmkeepError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write failure for `path`
pub fn write_failed(path: &Path, reason: impl ToString) -> FirmkeepError {
    FirmkeepError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory copy failure
pub fn copy_failed(src: &Path, dst: &Path, reason: impl ToString) -> FirmkeepError {
    FirmkeepError::DirCopyFailed {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> FirmkeepError {
    FirmkeepError::IoError {
        message: message.into(),
    }
}
