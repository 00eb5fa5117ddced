//! Git error handling
//!
//! This module handles:
//! - Interpreting git2 errors into user-friendly messages
//! - Recognizing a missing publish branch, which is an expected outcome

use git2::{Error, ErrorClass, ErrorCode};

/// Kind of failure behind a git2 error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    RepositoryNotFound,
    AuthenticationFailed,
    PermissionDenied,
    NetworkError,
    HttpCertificate,
    HttpSsl,
    TargetNotEmpty,
    Other(ErrorClass),
}

type ErrorCheck = fn(&str, ErrorClass) -> bool;

const CLASSIFICATIONS: &[(ErrorCheck, FailureKind)] = &[
    (
        |msg, _| msg.contains("exists and is not an empty directory"),
        FailureKind::TargetNotEmpty,
    ),
    (
        |msg, _| {
            msg.contains("not found")
                || msg.contains("404")
                || msg.contains("does not appear to be a git repository")
                || msg.contains("too many redirects")
                || msg.contains("authentication replays")
        },
        FailureKind::RepositoryNotFound,
    ),
    (
        |msg, _| msg.contains("authentication") || msg.contains("credentials"),
        FailureKind::AuthenticationFailed,
    ),
    (
        |msg, _| msg.contains("permission denied") || msg.contains("access denied"),
        FailureKind::PermissionDenied,
    ),
    (
        |msg, _| {
            msg.contains("connection")
                || msg.contains("network")
                || msg.contains("timeout")
                || msg.contains("timed out")
                || msg.contains("resolve")
        },
        FailureKind::NetworkError,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("certificate"),
        FailureKind::HttpCertificate,
    ),
    (
        |msg, class| class == ErrorClass::Http && msg.contains("ssl"),
        FailureKind::HttpSsl,
    ),
];

fn classify(msg: &str, class: ErrorClass) -> FailureKind {
    CLASSIFICATIONS
        .iter()
        .find(|(check, _)| check(msg, class))
        .map_or(FailureKind::Other(class), |(_, kind)| *kind)
}

/// Whether the clone failed because the requested branch does not exist
/// on the remote.
pub fn is_missing_branch(err: &Error, branch: &str) -> bool {
    err.code() == ErrorCode::NotFound
        && err.class() == ErrorClass::Reference
        && err.message().contains(branch)
}

/// Interpret a git2 error and provide a more user-friendly message
pub fn interpret_git_error(err: &Error) -> String {
    let message = err.message().to_lowercase();

    match classify(&message, err.class()) {
        FailureKind::RepositoryNotFound => "Repository not found".to_string(),
        FailureKind::AuthenticationFailed => "Authentication failed".to_string(),
        FailureKind::PermissionDenied => "Permission denied".to_string(),
        FailureKind::NetworkError => "Network error".to_string(),
        FailureKind::HttpCertificate => "Certificate error".to_string(),
        FailureKind::HttpSsl => "SSL error".to_string(),
        FailureKind::TargetNotEmpty => "Scratch directory exists and is not empty".to_string(),
        FailureKind::Other(ErrorClass::Http) => format!("HTTP error: {}", err.message()),
        FailureKind::Other(ErrorClass::Ssh) => format!("SSH error: {}", err.message()),
        FailureKind::Other(_) => err.message().to_string(),
    }
}
