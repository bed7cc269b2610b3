//! The version bump command
//!
//! Validates the version, resolves the project root once, then plans and
//! writes every target in the default table.

use std::path::Path;

use colored::Colorize;

use bump_core::{Plan, Synchronizer, TargetTable, VersionString};
use bump_fs::{RootMarkers, find_project_root};

use crate::error::Result;

/// Output and write behaviour of a bump.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpOptions {
    pub dry_run: bool,
    pub json: bool,
}

/// Run the bump command from `cwd`.
pub fn run_bump(cwd: &Path, input: &str, options: BumpOptions) -> Result<()> {
    let version = VersionString::parse(input)?;
    let root = find_project_root(cwd, &RootMarkers::default())?;
    let sync = Synchronizer::new(root, TargetTable::default());

    if !options.json {
        let label = if options.dry_run { "Checking" } else { "Bumping" };
        println!("{label} version to {}...", version.to_string().cyan());
    }

    let plan = sync.plan(&version)?;

    if options.dry_run {
        return print_dry_run(&sync, &plan, options.json);
    }

    let report = sync.apply(&plan, |edit| {
        if !options.json {
            println!("  {} {}", "Updated:".green(), edit.display_path);
        }
    })?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!(
            "All {} files updated to version {}",
            sync.targets().len(),
            version.to_string().bold()
        );
    }

    Ok(())
}

fn print_dry_run(sync: &Synchronizer, plan: &Plan, json: bool) -> Result<()> {
    if json {
        let report = plan.report(sync.root(), true);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut pending = 0;
    for edit in &plan.edits {
        if edit.is_changed() {
            pending += 1;
            print!("{}", edit.diff());
        } else {
            println!("  {} {}", "Unchanged:".dimmed(), edit.display_path);
        }
    }

    println!();
    println!(
        "Dry run: {} of {} files would change, nothing written",
        pending,
        sync.targets().len()
    );
    Ok(())
}
