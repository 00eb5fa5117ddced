//! Manifest index (`docs/manifest-index.json`)
//!
//! The manifest lists every version directory of the output tree: dev builds
//! first, newest first, then releases, newest first. It is a derived view,
//! rebuilt from the directory listing on every run and never patched in
//! place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::fs::list_version_dirs;
use crate::error::{FirmkeepError, Result, fs as fs_error};
use crate::layout::FirmwareLayout;
use crate::version::{self, LexicalOrdering, VersionOrdering};

/// Manifest index content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIndex {
    /// Version identifiers in display order
    pub versions: Vec<String>,
}

impl ManifestIndex {
    /// Order `names` for the manifest.
    ///
    /// Dev builds are sorted lexically and releases with `release_ordering`,
    /// both descending.
    pub fn from_versions<I, S>(names: I, release_ordering: &dyn VersionOrdering) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (mut dev, mut releases) = version::partition(names);
        LexicalOrdering.sort_descending(&mut dev);
        release_ordering.sort_descending(&mut releases);

        dev.append(&mut releases);
        Self { versions: dev }
    }

    /// Build the manifest from the version directories of `layout`.
    ///
    /// A missing firmware directory yields an empty manifest.
    pub fn scan(layout: &FirmwareLayout, release_ordering: &dyn VersionOrdering) -> Result<Self> {
        let listing = list_version_dirs(&layout.firmware_dir())?;
        Ok(Self::from_versions(listing.versions, release_ordering))
    }

    /// Load a manifest from disk
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
        serde_json::from_str(&json).map_err(|e| FirmkeepError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
        }
        fs::write(path, self.to_json()?).map_err(|e| fs_error::write_failed(path, e))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Rebuild the manifest of `layout` from its firmware directory and write it
pub fn rebuild(
    layout: &FirmwareLayout,
    release_ordering: &dyn VersionOrdering,
) -> Result<ManifestIndex> {
    let manifest = ManifestIndex::scan(layout, release_ordering)?;
    manifest.save(&layout.manifest_path())?;
    Ok(manifest)
}
