//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Directory entries of a firmware tree, split into version directories and
/// everything else.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirListing {
    /// Names of sub-directories, sorted ascending
    pub versions: Vec<String>,
    /// Entries that cannot be versions (plain files, non-UTF-8 names)
    pub ignored: Vec<PathBuf>,
}

/// List the immediate sub-directories of `dir`.
///
/// A missing directory lists as empty.
pub fn list_version_dirs(dir: &Path) -> Result<DirListing> {
    let mut listing = DirListing::default();
    if !dir.exists() {
        return Ok(listing);
    }

    let entries = fs::read_dir(dir).map_err(|e| fs_error::read_failed(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| fs_error::read_failed(dir, e))?;
        let path = entry.path();
        match entry.file_name().into_string() {
            Ok(name) if path.is_dir() => listing.versions.push(name),
            _ => listing.ignored.push(path),
        }
    }

    listing.versions.sort();
    listing.ignored.sort();
    Ok(listing)
}

/// Copy a directory tree, following symlinks
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| fs_error::copy_failed(src, dst, e))?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| fs_error::copy_failed(src, dst, e))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| fs_error::copy_failed(src, dst, e))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| fs_error::copy_failed(entry.path(), &target, e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| fs_error::copy_failed(entry.path(), &target, e))?;
        }
    }

    Ok(())
}

/// Replace `dst` with a copy of `src`.
///
/// Any existing `dst` is removed first; contents are never merged.
pub fn replace_dir(src: &Path, dst: &Path) -> Result<()> {
    if dst.is_dir() {
        fs::remove_dir_all(dst).map_err(|e| fs_error::write_failed(dst, e))?;
    } else if dst.exists() {
        fs::remove_file(dst).map_err(|e| fs_error::write_failed(dst, e))?;
    }
    copy_dir_recursive(src, dst)
}
