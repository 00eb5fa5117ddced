//! Version identifiers and their classification
//!
//! A version identifier names one directory under `docs/firmware/`. The
//! `dev-` prefix is the only thing separating transient dev builds from
//! permanent releases.

pub mod ordering;

pub use ordering::{LexicalOrdering, OrderingKind, VersionOrdering};

use crate::error::{self, Result};

/// Prefix marking a dev build
pub const DEV_MARKER: &str = "dev-";

/// Retention class of a version identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionClass {
    /// Rotated build, only the newest N are kept
    Dev,
    /// Permanent build, kept forever
    Release,
}

impl VersionClass {
    pub fn is_dev(self) -> bool {
        self == VersionClass::Dev
    }
}

impl std::fmt::Display for VersionClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionClass::Dev => f.write_str("dev"),
            VersionClass::Release => f.write_str("release"),
        }
    }
}

/// Classify a version identifier by its prefix
pub fn classify(version: &str) -> VersionClass {
    if version.starts_with(DEV_MARKER) {
        VersionClass::Dev
    } else {
        VersionClass::Release
    }
}

pub fn is_dev(version: &str) -> bool {
    classify(version).is_dev()
}

/// Check that a version identifier can be used as a single directory name
/// below the firmware directory.
pub fn validate(version: &str) -> Result<()> {
    let reason = if version.is_empty() {
        Some("must not be empty")
    } else if version == "." || version == ".." {
        Some("must not be a relative path component")
    } else if version.contains(['/', '\\']) {
        Some("must be a single path component")
    } else if version.contains('\0') {
        Some("must not contain NUL bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(error::version::invalid(version, reason)),
        None => Ok(()),
    }
}

/// Split version names into `(dev, release)` keeping their relative order
pub fn partition<I, S>(versions: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    versions
        .into_iter()
        .map(Into::into)
        .partition(|v: &String| is_dev(v))
}
