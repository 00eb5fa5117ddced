//! Git operation errors
//!
//! Every constructor takes the repository URL already redacted; see
//! [`crate::git::url::redact_credentials`].

use super::FirmkeepError;

pub fn clone_failed(url: impl Into<String>, reason: impl Into<String>) -> FirmkeepError {
    FirmkeepError::GitCloneFailed {
        url: url.into(),
        reason: reason.into(),
    }
}

pub fn branch_not_found(url: impl Into<String>, branch: impl Into<String>) -> FirmkeepError {
    FirmkeepError::GitBranchNotFound {
        url: url.into(),
        branch: branch.into(),
    }
}

pub fn operation_failed(message: impl Into<String>) -> FirmkeepError {
    FirmkeepError::GitOperationFailed {
        message: message.into(),
    }
}
