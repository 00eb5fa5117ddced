//! Firmkeep - firmware release retention
//!
//! A command line tool run in CI after a site build: it carries the firmware
//! versions already published on a static-site branch over into the new
//! `docs/` tree and rebuilds the manifest that lists them.

use clap::Parser;

mod baseline;
mod cli;
mod commands;
mod common;
mod error;
mod git;
mod layout;
mod manifest;
mod operations;
mod retention;
mod temp;
#[cfg(test)]
mod test_fixtures;
mod ui;
mod version;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Publish(args) => {
            commands::publish::run(cli.workspace, args, cli.verbose, cli.quiet)
        }
        Commands::Manifest(args) => commands::manifest::run(cli.workspace, args, cli.quiet),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
