//! Shallow single-branch clone of the published tree

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::{interpret_git_error, is_missing_branch};
use super::url::{
    is_local, normalize_file_url_for_clone, normalize_ssh_url_for_clone, redact_credentials,
};
use crate::error::{Result, git as git_error};

/// Clone only `branch` of `url` into `target`.
///
/// Remote URLs are fetched with depth 1; libgit2 does not support shallow
/// fetches from local paths, so those are cloned in full.
pub fn clone_branch(url: &str, branch: &str, target: &Path) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks, url);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    if !is_local(url) {
        fetch_options.depth(1);
    }

    let refspec = format!("+refs/heads/{branch}:refs/remotes/origin/{branch}");
    let mut builder = RepoBuilder::new();
    builder
        .branch(branch)
        .fetch_options(fetch_options)
        .remote_create(move |repo, name, url| repo.remote_with_fetch(name, url, &refspec));

    let url_to_clone = normalize_ssh_url_for_clone(url);
    let url_to_clone = normalize_file_url_for_clone(&url_to_clone);
    builder.clone(url_to_clone.as_ref(), target).map_err(|e| {
        let display_url = redact_credentials(url);
        if is_missing_branch(&e, branch) {
            git_error::branch_not_found(display_url, branch)
        } else {
            git_error::clone_failed(display_url, interpret_git_error(&e))
        }
    })
}
