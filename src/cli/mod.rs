//! CLI definitions using clap derive API
//!
//! Each command's arguments live in their own submodule:
//! - publish: Publish command arguments
//! - manifest: Manifest command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod manifest;
pub mod publish;

pub use completions::CompletionsArgs;
pub use manifest::ManifestArgs;
pub use publish::PublishArgs;

/// Firmkeep - firmware release retention for static sites
///
/// Preserves previously published firmware versions when a CI build replaces the site.
#[derive(Parser, Debug)]
#[command(
    name = "firmkeep",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Keep published firmware releases and recent dev builds across site deployments",
    long_about = "Firmkeep merges the firmware builds already published on a static-site branch \
                  into a freshly built docs/ tree. Every release is kept, dev builds are rotated \
                  so only the newest few survive, and docs/manifest-index.json is rebuilt to list \
                  what ends up on disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  firmkeep publish --version dev-042 --repo-url $URL   \x1b[90m# Publish a dev build\x1b[0m\n   \
                  firmkeep publish --version 1.2.0 --repo-url $URL     \x1b[90m# Publish a release\x1b[0m\n   \
                  firmkeep publish --version 1.2.0 --dry-run ...      \x1b[90m# Preview retention\x1b[0m\n   \
                  firmkeep manifest                                   \x1b[90m# Rebuild the manifest only\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory holding docs/ (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "FIRMKEEP_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Suppress progress output (errors are still printed)
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge the published baseline into docs/ and rebuild the manifest
    Publish(PublishArgs),

    /// Rebuild docs/manifest-index.json from docs/firmware/
    Manifest(ManifestArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
