//! Retention policy
//!
//! Decides which versions of the baseline snapshot survive into the output
//! tree, then copies them there:
//! - every release, unconditionally
//! - the newest dev builds, sorted lexically, up to the configured count
//!   minus the slot the current build takes when it is a dev build itself
//!
//! [`RetentionPolicy::plan`] is pure; [`materialize`] performs the copies.

use std::path::Path;

use crate::common::fs::{list_version_dirs, replace_dir};
use crate::error::Result;
use crate::layout::snapshot_firmware_dir;
use crate::ui::Reporter;
use crate::version::{self, VersionClass};

/// Number of dev builds kept when nothing else is configured
pub const DEFAULT_KEEP_DEV: usize = 2;

/// How many dev builds to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Dev builds kept in total, counting the current build when it is a dev
    /// build
    pub keep_dev: usize,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            keep_dev: DEFAULT_KEEP_DEV,
        }
    }
}

/// Versions to copy from the baseline
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Release versions, ascending
    pub releases: Vec<String>,
    /// Dev versions to copy, ascending
    pub dev: Vec<String>,
    /// Dev versions rotated out, ascending
    pub dropped: Vec<String>,
    /// Historical dev slots available for this run
    pub dev_slots: usize,
    /// A selected dev build equal to the current version was left alone
    pub skipped_current: bool,
}

impl RetentionPlan {
    /// Every version the plan copies into the output tree
    pub fn preserved(&self) -> impl Iterator<Item = &str> {
        self.releases.iter().chain(&self.dev).map(String::as_str)
    }
}

impl RetentionPolicy {
    pub fn new(keep_dev: usize) -> Self {
        Self { keep_dev }
    }

    /// Historical dev builds that may be kept next to `current`
    pub fn dev_slots(&self, current: &str) -> usize {
        match version::classify(current) {
            VersionClass::Dev => self.keep_dev.saturating_sub(1),
            VersionClass::Release => self.keep_dev,
        }
    }

    /// Decide what to keep from the `baseline` version names
    pub fn plan<S: AsRef<str>>(&self, baseline: &[S], current: &str) -> RetentionPlan {
        let (mut dev, mut releases) =
            version::partition(baseline.iter().map(AsRef::<str>::as_ref));
        releases.sort();
        dev.sort();

        let dev_slots = self.dev_slots(current);
        let kept = dev.split_off(dev.len().saturating_sub(dev_slots));
        let skipped_current = kept.iter().any(|v| v == current);
        let kept = kept.into_iter().filter(|v| v != current).collect();

        RetentionPlan {
            releases,
            dev: kept,
            dropped: dev,
            dev_slots,
            skipped_current,
        }
    }
}

/// Plan retention for a baseline snapshot.
///
/// Returns `None` when the snapshot has no firmware subtree.
pub fn plan_snapshot(
    snapshot: &Path,
    current: &str,
    policy: RetentionPolicy,
    reporter: &mut dyn Reporter,
) -> Result<Option<RetentionPlan>> {
    let firmware = snapshot_firmware_dir(snapshot);
    if !firmware.is_dir() {
        reporter.warn("No firmware directory in the published baseline yet");
        return Ok(None);
    }

    let listing = list_version_dirs(&firmware)?;
    for path in &listing.ignored {
        reporter.detail(&format!("Ignoring {}", path.display()));
    }

    let plan = policy.plan(&listing.versions, current);
    let class = version::classify(current);
    let previous = if class.is_dev() { " previous" } else { "" };
    reporter.item(&format!(
        "Current build is {class}, keeping {}{previous} dev builds",
        plan.dev_slots
    ));
    Ok(Some(plan))
}

/// Copy the planned versions from `snapshot` into `output_firmware`.
///
/// Existing directories of the same name are replaced, never merged.
pub fn materialize(
    plan: &RetentionPlan,
    snapshot: &Path,
    output_firmware: &Path,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let source = snapshot_firmware_dir(snapshot);

    for release in &plan.releases {
        reporter.item(&format!("Preserving release: {release}"));
        replace_dir(&source.join(release), &output_firmware.join(release))?;
    }

    for dev in &plan.dev {
        reporter.item(&format!("Preserving dev build: {dev}"));
        replace_dir(&source.join(dev), &output_firmware.join(dev))?;
    }

    for dropped in &plan.dropped {
        reporter.detail(&format!("Rotating out dev build: {dropped}"));
    }

    Ok(())
}
