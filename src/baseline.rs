//! Baseline snapshot of the previously published tree
//!
//! The snapshot is fetched fresh on every run into a scratch directory,
//! either one given on the command line or a temporary directory removed
//! when the run ends.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, fs as fs_error};
use crate::git;

/// Where the previously published tree comes from
pub trait BaselineSource {
    /// Location of the baseline, safe to print
    fn describe(&self) -> String;

    /// Materialize the baseline into `target`
    fn fetch(&self, target: &Path) -> Result<()>;
}

/// A branch of a git repository
#[derive(Debug, Clone)]
pub struct GitBaseline {
    url: String,
    branch: String,
}

impl GitBaseline {
    pub fn new(url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            branch: branch.into(),
        }
    }
}

impl BaselineSource for GitBaseline {
    fn describe(&self) -> String {
        format!("{} ({})", git::redact_credentials(&self.url), self.branch)
    }

    fn fetch(&self, target: &Path) -> Result<()> {
        git::clone_branch(&self.url, &self.branch, target).map(|_| ())
    }
}

/// Directory receiving the baseline clone
#[derive(Debug)]
pub enum ScratchDir {
    /// Given by the caller; left in place afterwards
    Given(PathBuf),
    /// Created for this run; removed on drop
    Temporary(TempDir),
}

impl ScratchDir {
    /// Use `path` when given, otherwise create a temporary directory
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::Given(path)),
            None => tempfile::Builder::new()
                .prefix("firmkeep-baseline-")
                .tempdir_in(crate::temp::temp_dir_base())
                .map(Self::Temporary)
                .map_err(|e| fs_error::write_failed(&crate::temp::temp_dir_base(), e)),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Given(path) => path,
            Self::Temporary(dir) => dir.path(),
        }
    }
}
