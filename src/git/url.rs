//! URL handling for the baseline clone
//!
//! This module handles:
//! - Normalizing SSH URLs from SCP-style to ssh:// format
//! - Normalizing file:// URLs for libgit2 compatibility
//! - Reading and redacting credentials embedded by the caller
//!   (`https://x-access-token:<token>@github.com/...`)

use std::borrow::Cow;

/// Normalize SSH URLs from SCP-style (git@host:path) to ssh:// format.
///
/// libgit2 may have issues with SCP-style SSH URLs, so we convert them to
/// the explicit ssh:// format for better compatibility.
pub fn normalize_ssh_url_for_clone(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }

    // git@host:path -> ssh://git@host/path
    match url.split_once(':') {
        Some((host_part, path_part)) => {
            let path_part = path_part.strip_prefix('/').unwrap_or(path_part);
            Cow::Owned(format!("ssh://{host_part}/{path_part}"))
        }
        None => Cow::Borrowed(url),
    }
}

/// Normalize file:// URLs so libgit2 can resolve them on Unix.
pub fn normalize_file_url_for_clone(url: &str) -> Cow<'_, str> {
    let Some(after) = url.strip_prefix("file://") else {
        return Cow::Borrowed(url);
    };
    if after.contains('\\') {
        let path = after.replace('\\', "/");
        let path = path.trim_start_matches('/');
        return Cow::Owned(format!("file:///{path}"));
    }
    if !after.is_empty() && !after.starts_with('/') {
        return Cow::Owned(format!("file:///{after}"));
    }
    Cow::Borrowed(url)
}

/// Whether the URL points at the local filesystem.
///
/// libgit2 cannot shallow-fetch local repositories.
pub fn is_local(url: &str) -> bool {
    url.starts_with("file://") || url.starts_with('/') || std::path::Path::new(url).is_absolute()
}

/// Byte range of the `user[:password]` part of a `scheme://user@host/...` URL
fn userinfo_range(url: &str) -> Option<(usize, usize)> {
    let start = url.find("://")? + 3;
    let authority_end = url[start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| start + i);
    let at = url[start..authority_end].rfind('@')? + start;
    Some((start, at))
}

/// Credentials embedded in the URL as `(username, password)`.
///
/// A bare token (`https://<token>@host/...`) is returned as the username
/// with an empty password.
pub fn embedded_credentials(url: &str) -> Option<(String, String)> {
    let (start, end) = userinfo_range(url)?;
    let userinfo = &url[start..end];
    if userinfo.is_empty() {
        return None;
    }
    let (user, password) = userinfo.split_once(':').unwrap_or((userinfo, ""));
    Some((user.to_string(), password.to_string()))
}

/// Replace embedded credentials with `***` so the URL can be printed.
pub fn redact_credentials(url: &str) -> Cow<'_, str> {
    match userinfo_range(url) {
        Some((start, end)) if start < end => {
            Cow::Owned(format!("{}***{}", &url[..start], &url[end..]))
        }
        _ => Cow::Borrowed(url),
    }
}
