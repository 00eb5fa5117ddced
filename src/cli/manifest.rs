use clap::Parser;

use crate::version::OrderingKind;

/// Arguments for the manifest command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rebuild docs/manifest-index.json:\n    firmkeep manifest\n\n\
                  Print the manifest without writing it:\n    firmkeep manifest --dry-run\n\n\
                  Order releases as plain strings:\n    firmkeep manifest --ordering lexical")]
pub struct ManifestArgs {
    /// How release versions are ordered
    #[arg(long, value_enum, default_value_t = OrderingKind::Semantic)]
    pub ordering: OrderingKind,

    /// Print the manifest instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
