//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers to build firmware trees and to publish them on a branch of a local
//! git repository, which the baseline fetch can then clone through its path.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_firmware_tree, create_published_repo};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let firmware = create_firmware_tree(temp.path(), &["1.0.0", "dev-001"]);
//!     let repo = create_published_repo(temp.path(), "gh-pages", &["1.0.0"]);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write file");
}

/// Create `root/<version>/firmware.bin` for every version, the file holding
/// the version name so copies can be told apart.
pub fn create_firmware_tree(root: &Path, versions: &[&str]) -> PathBuf {
    fs::create_dir_all(root).expect("Failed to create firmware directory");
    for version in versions {
        write_file(&root.join(version).join("firmware.bin"), version);
    }
    root.to_path_buf()
}

/// Create a git repository under `parent/remote` whose `branch` holds
/// `firmware/<version>/firmware.bin` for every version.
///
/// An empty `versions` slice commits a tree without the firmware directory.
pub fn create_published_repo(parent: &Path, branch: &str, versions: &[&str]) -> PathBuf {
    let path = parent.join("remote");
    let repo = Repository::init(&path).expect("Failed to init git repository");

    if versions.is_empty() {
        write_file(&path.join("index.html"), "<html></html>");
    } else {
        create_firmware_tree(&path.join("firmware"), versions);
    }

    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");

    let sig = Signature::now("Test", "test@test.com").expect("Failed to create signature");
    let refname = format!("refs/heads/{branch}");
    repo.commit(Some(&refname), &sig, &sig, "Publish firmware", &tree, &[])
        .expect("Failed to commit");
    repo.set_head(&refname).expect("Failed to set HEAD");

    path
}
