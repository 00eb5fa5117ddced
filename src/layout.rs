//! Paths of the published tree
//!
//! ```text
//! <workspace>/docs/
//! ├── firmware/<version>/...     one directory per retained version
//! └── manifest-index.json        {"versions": [...]}
//! ```
//!
//! The publish branch is the `docs/` directory itself, so a baseline
//! snapshot keeps its versions under `<snapshot>/firmware/`.

use std::path::{Path, PathBuf};

pub const DOCS_DIR: &str = "docs";
pub const FIRMWARE_DIR: &str = "firmware";
pub const MANIFEST_FILE: &str = "manifest-index.json";

/// Output tree rooted at a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareLayout {
    workspace: PathBuf,
}

impl FirmwareLayout {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.workspace.join(DOCS_DIR)
    }

    pub fn firmware_dir(&self) -> PathBuf {
        self.docs_dir().join(FIRMWARE_DIR)
    }

    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.firmware_dir().join(version)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.docs_dir().join(MANIFEST_FILE)
    }
}

/// Firmware subtree of a baseline snapshot
pub fn snapshot_firmware_dir(snapshot: &Path) -> PathBuf {
    snapshot.join(FIRMWARE_DIR)
}
