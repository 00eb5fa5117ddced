//! Error types and handling for firmkeep
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`git`]: Baseline clone errors
//! - [`fs`]: File system errors
//! - [`version`]: Version identifier errors

pub mod fs;
pub mod git;
pub mod version;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for firmkeep operations
#[derive(Error, Diagnostic, Debug)]
pub enum FirmkeepError {
    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(firmkeep::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to clone repository: {url}: {reason}")]
    #[diagnostic(
        code(firmkeep::git::clone_failed),
        help("Check that the URL is correct and that the credentials can read the repository")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Branch '{branch}' not found in {url}")]
    #[diagnostic(
        code(firmkeep::git::branch_not_found),
        help("Nothing has been published yet, or --branch names the wrong branch")
    )]
    GitBranchNotFound { url: String, branch: String },

    // Version errors
    #[error("Invalid version identifier '{version}': {reason}")]
    #[diagnostic(
        code(firmkeep::version::invalid),
        help("Version identifiers are used as directory names, e.g. 1.2.0 or dev-20240101-abc123")
    )]
    InvalidVersion { version: String, reason: String },

    // File system errors
    #[error("Failed to read: {path}: {reason}")]
    #[diagnostic(code(firmkeep::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write: {path}: {reason}")]
    #[diagnostic(code(firmkeep::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy '{src}' to '{dst}': {reason}")]
    #[diagnostic(code(firmkeep::fs::copy_failed))]
    DirCopyFailed {
        src: String,
        dst: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(firmkeep::fs::io_error))]
    IoError { message: String },

    // Manifest errors
    #[error("Failed to parse manifest {path}: {reason}")]
    #[diagnostic(
        code(firmkeep::manifest::parse_failed),
        help("The manifest is regenerated on every run; remove it and run `firmkeep manifest`")
    )]
    ManifestParseFailed { path: String, reason: String },

    #[error("Failed to serialize manifest: {reason}")]
    #[diagnostic(code(firmkeep::manifest::serialize_failed))]
    ManifestSerializeFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(firmkeep::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for FirmkeepError {
    fn from(err: std::io::Error) -> Self {
        FirmkeepError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FirmkeepError {
    fn from(err: serde_json::Error) -> Self {
        FirmkeepError::ManifestSerializeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for FirmkeepError {
    fn from(err: git2::Error) -> Self {
        git::operation_failed(err.message())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, FirmkeepError>;
