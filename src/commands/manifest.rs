//! Manifest command implementation
//!
//! Rebuilds `docs/manifest-index.json` from the version directories already
//! in the workspace. Nothing is fetched and nothing is copied.

use console::Style;

use crate::cli::ManifestArgs;
use crate::commands::helpers::{print_manifest, resolve_workspace_path};
use crate::error::Result;
use crate::layout::FirmwareLayout;
use crate::manifest::{self, ManifestIndex};

/// Run manifest command
pub fn run(workspace: Option<std::path::PathBuf>, args: ManifestArgs, quiet: bool) -> Result<()> {
    let workspace_root = resolve_workspace_path(workspace)?;
    let layout = FirmwareLayout::new(&workspace_root);
    let ordering = args.ordering.strategy();

    let manifest = if args.dry_run {
        ManifestIndex::scan(&layout, ordering.as_ref())?
    } else {
        manifest::rebuild(&layout, ordering.as_ref())?
    };

    if quiet {
        return Ok(());
    }

    if !args.dry_run {
        println!(
            "{} Manifest index updated with {} versions: {}",
            Style::new().green().bold().apply_to("✓"),
            manifest.len(),
            layout.manifest_path().display()
        );
    }
    if manifest.is_empty() {
        println!(
            "No firmware versions found in {}",
            layout.firmware_dir().display()
        );
    }
    print_manifest(&manifest)
}
