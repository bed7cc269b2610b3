//! CLI argument parsing using clap derive

use clap::Parser;

/// Rewrite the release version in every manifest of the project
///
/// Examples:
///   bump-version 0.2.0             # update all six files
///   bump-version 0.2.0 --dry-run   # show the diff, write nothing
#[derive(Parser, Debug)]
#[command(name = "bump-version")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// New version, in X.Y.Z form
    ///
    /// Collected as a list so that a missing or extra argument produces the
    /// tool's own usage message instead of clap's.
    #[arg(value_name = "VERSION")]
    pub versions: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON report instead of progress lines
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The single version argument, if exactly one was given.
    pub fn version_arg(&self) -> Option<&str> {
        match self.versions.as_slice() {
            [version] => Some(version),
            _ => None,
        }
    }
}
