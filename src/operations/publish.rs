//! Publish operation: the release retention pipeline
//!
//! fetch baseline → plan retention → materialize → rebuild manifest
//!
//! Each stage finishes before the next one starts. A baseline that cannot be
//! fetched is not an error: the run continues as if nothing had been
//! published before.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::baseline::BaselineSource;
use crate::cli::PublishArgs;
use crate::common::fs::list_version_dirs;
use crate::error::{FirmkeepError, Result, fs as fs_error};
use crate::layout::FirmwareLayout;
use crate::manifest::{self, ManifestIndex};
use crate::retention::{self, RetentionPlan, RetentionPolicy};
use crate::ui::Reporter;
use crate::version::{self, OrderingKind, VersionOrdering};

/// Configuration options for publish
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Version identifier of the build already in the output tree
    pub current_version: String,
    pub policy: RetentionPolicy,
    pub ordering: OrderingKind,
    /// Plan only; copy nothing and leave the manifest alone
    pub dry_run: bool,
}

impl From<&PublishArgs> for PublishOptions {
    fn from(args: &PublishArgs) -> Self {
        Self {
            current_version: args.current_version.clone(),
            policy: RetentionPolicy::new(args.keep_dev),
            ordering: args.ordering,
            dry_run: args.dry_run,
        }
    }
}

/// Result of a publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// The baseline was fetched
    pub baseline_found: bool,
    /// Retention decisions, `None` without a baseline firmware tree
    pub plan: Option<RetentionPlan>,
    /// Manifest written (or, for a dry run, the one that would be written)
    pub manifest: ManifestIndex,
}

/// High-level publish operation over one output tree
pub struct PublishOperation {
    layout: FirmwareLayout,
    options: PublishOptions,
    ordering: Box<dyn VersionOrdering>,
}

impl PublishOperation {
    pub fn new(layout: FirmwareLayout, options: PublishOptions) -> Self {
        let ordering = options.ordering.strategy();
        Self {
            layout,
            options,
            ordering,
        }
    }

    /// Use a custom release ordering instead of the configured one
    #[cfg(test)]
    pub fn with_ordering(mut self, ordering: Box<dyn VersionOrdering>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Run the pipeline, cloning the baseline into `scratch`
    pub fn execute(
        &self,
        source: &dyn BaselineSource,
        scratch: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<PublishOutcome> {
        let current = self.options.current_version.as_str();
        version::validate(current)?;

        reporter.step("Preserving existing releases and dev builds from the published baseline...");
        if !self.options.dry_run {
            let firmware_dir = self.layout.firmware_dir();
            fs::create_dir_all(&firmware_dir)
                .map_err(|e| fs_error::write_failed(&firmware_dir, e))?;
        }
        self.check_current_build(current, reporter);

        let baseline_found = fetch_baseline(source, scratch, reporter);
        let plan = if baseline_found {
            retention::plan_snapshot(scratch, current, self.options.policy, reporter)?
        } else {
            None
        };

        let manifest = if self.options.dry_run {
            self.preview_manifest(plan.as_ref())?
        } else {
            if let Some(plan) = &plan {
                retention::materialize(plan, scratch, &self.layout.firmware_dir(), reporter)?;
            }
            let manifest = manifest::rebuild(&self.layout, self.ordering.as_ref())?;
            reporter.item(&format!(
                "Manifest index updated with {} versions",
                manifest.len()
            ));
            manifest
        };

        if !self.options.dry_run {
            reporter.success("Firmware release management complete");
        }

        Ok(PublishOutcome {
            baseline_found,
            plan,
            manifest,
        })
    }

    fn check_current_build(&self, current: &str, reporter: &mut dyn Reporter) {
        let dir = self.layout.version_dir(current);
        if !dir.is_dir() {
            reporter.warn(&format!(
                "Current build {current} not found at {}",
                dir.display()
            ));
        }
    }

    /// Manifest the output tree would have once `plan` is materialized
    fn preview_manifest(&self, plan: Option<&RetentionPlan>) -> Result<ManifestIndex> {
        let mut versions: BTreeSet<String> = list_version_dirs(&self.layout.firmware_dir())?
            .versions
            .into_iter()
            .collect();
        if let Some(plan) = plan {
            versions.extend(plan.preserved().map(str::to_string));
        }
        Ok(ManifestIndex::from_versions(versions, self.ordering.as_ref()))
    }
}

/// Fetch the baseline into `scratch`; `false` means "nothing published yet"
fn fetch_baseline(
    source: &dyn BaselineSource,
    scratch: &Path,
    reporter: &mut dyn Reporter,
) -> bool {
    reporter.start_fetch(&source.describe());
    let result = source.fetch(scratch);
    reporter.finish_fetch();

    match result {
        Ok(()) => {
            reporter.detail(&format!("Fetched baseline into {}", scratch.display()));
            true
        }
        Err(FirmkeepError::GitBranchNotFound { branch, .. }) => {
            reporter.warn(&format!("No existing {branch} branch found"));
            false
        }
        Err(e) => {
            reporter.warn(&format!("Baseline unavailable, continuing without it: {e}"));
            false
        }
    }
}
