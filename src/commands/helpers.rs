//! Command helper utilities

use std::path::PathBuf;

use console::Style;

use crate::error::{Result, fs as fs_error};
use crate::manifest::ManifestIndex;
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Reporter matching the global output flags
pub fn reporter(verbose: bool, quiet: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(verbose))
    }
}

/// Print the manifest as it is (or would be) written
pub fn print_manifest(manifest: &ManifestIndex) -> Result<()> {
    println!("{}", manifest.to_json()?);
    Ok(())
}

/// Print a titled list of versions, or nothing when it is empty
pub fn print_versions(title: &str, versions: &[String]) {
    if versions.is_empty() {
        return;
    }
    println!("{}", Style::new().bold().apply_to(title));
    for version in versions {
        println!("  {}", Style::new().yellow().apply_to(version));
    }
}
