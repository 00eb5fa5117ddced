//! Publish command implementation
//!
//! Resolves the workspace and the scratch directory, then runs the publish
//! pipeline against the configured branch.

use console::Style;

use crate::baseline::{GitBaseline, ScratchDir};
use crate::cli::PublishArgs;
use crate::commands::helpers::{print_manifest, print_versions, reporter, resolve_workspace_path};
use crate::error::Result;
use crate::layout::FirmwareLayout;
use crate::manifest::ManifestIndex;
use crate::operations::publish::{PublishOperation, PublishOptions, PublishOutcome};

/// Run publish command
pub fn run(
    workspace: Option<std::path::PathBuf>,
    args: PublishArgs,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let workspace_root = resolve_workspace_path(workspace)?;
    let layout = FirmwareLayout::new(&workspace_root);
    let scratch = ScratchDir::resolve(args.gh_pages_dir.clone())?;
    let source = GitBaseline::new(&args.repo_url, &args.branch);

    let options = PublishOptions::from(&args);
    let mut reporter = reporter(verbose, quiet);
    let outcome = PublishOperation::new(layout.clone(), options).execute(
        &source,
        scratch.path(),
        reporter.as_mut(),
    )?;

    if args.dry_run {
        print_dry_run(&layout, &outcome)?;
    }

    Ok(())
}

fn print_dry_run(layout: &FirmwareLayout, outcome: &PublishOutcome) -> Result<()> {
    println!();
    println!(
        "{}",
        Style::new()
            .bold()
            .cyan()
            .apply_to("Dry run: nothing was copied or written")
    );

    if let Some(plan) = &outcome.plan {
        print_versions("Releases to preserve:", &plan.releases);
        print_versions("Dev builds to preserve:", &plan.dev);
        print_versions("Dev builds to rotate out:", &plan.dropped);
    }

    let manifest_path = layout.manifest_path();
    let unchanged = manifest_path.is_file()
        && ManifestIndex::load(&manifest_path).is_ok_and(|current| current == outcome.manifest);
    println!(
        "{}",
        Style::new().bold().apply_to(if unchanged {
            "Manifest (unchanged):"
        } else {
            "Manifest:"
        })
    );
    print_manifest(&outcome.manifest)
}
