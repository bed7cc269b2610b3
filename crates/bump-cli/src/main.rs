//! bump-version CLI
//!
//! Rewrites the release version across the project's manifests.

mod cli;
mod commands;
mod error;
mod logging;

use std::error::Error as _;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;

use cli::Cli;
use commands::BumpOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            tracing::debug!(error = %e, "argument parsing failed");
            let raw: Vec<String> = std::env::args().skip(1).collect();
            return Err(parse_failure(&raw, e.kind()));
        }
    };

    logging::init(cli.verbose)?;
    tracing::debug!(?cli, "parsed arguments");

    let version = cli.version_arg().ok_or(CliError::Usage)?;
    let cwd = std::env::current_dir().map_err(|e| bump_fs::Error::io(".", e))?;
    let options = BumpOptions {
        dry_run: cli.dry_run,
        json: cli.json,
    };

    commands::run_bump(&cwd, version, options)
}

/// Map a clap rejection onto the tool's own errors.
///
/// A lone argument that clap took for an unknown flag (`-1.2.3`, `--foo`) is
/// still the version argument, just a malformed one.
fn parse_failure(raw: &[String], kind: ErrorKind) -> CliError {
    match (raw, kind) {
        ([input], ErrorKind::UnknownArgument) => bump_core::Error::InvalidVersion {
            input: input.clone(),
        }
        .into(),
        _ => CliError::Usage,
    }
}

/// Print a failure the way the release workflow expects to read it.
fn report(err: &CliError) {
    if err.is_usage() {
        match err {
            CliError::Core(bump_core::Error::InvalidVersion { input }) => {
                println!("Error: Invalid version format '{input}'");
                println!("Expected format: X.Y.Z (e.g., 0.2.0)");
            }
            _ => {
                println!("{err}");
                println!("Example: bump-version 0.2.0");
            }
        }
        return;
    }

    eprintln!("{}: {}", "error".red().bold(), err);
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}
