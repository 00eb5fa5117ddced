//! Version identifier errors

use super::FirmkeepError;

pub fn invalid(version: impl Into<String>, reason: impl Into<String>) -> FirmkeepError {
    FirmkeepError::InvalidVersion {
        version: version.into(),
        reason: reason.into(),
    }
}
