//! Multi-file version synchronization
//!
//! A run has two phases. [`Synchronizer::plan`] reads every target and
//! computes its new content in memory, so a missing file or an unexpected
//! layout aborts before anything is written. [`Synchronizer::apply`] then
//! writes the planned contents in table order. There is no rollback once
//! writing has started.

use bump_fs::checksum::{compute_content_checksum, compute_file_checksum};
use bump_fs::{NormalizedPath, ProjectRoot, io};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::diff;
use crate::error::{Error, Result};
use crate::format::FileFormat;
use crate::targets::{TargetFile, TargetTable};
use crate::version::VersionString;

/// Rewrites the version of every file in a [`TargetTable`] under one root.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    root: ProjectRoot,
    targets: TargetTable,
}

/// A computed, not yet written, update to one target file.
#[derive(Debug, Clone)]
pub struct PlannedEdit {
    pub target: TargetFile,
    /// Absolute path of the file
    pub path: NormalizedPath,
    /// Path relative to the project root, for display
    pub display_path: String,
    /// Version recorded in the file before the update
    pub previous: Option<String>,
    pub original: String,
    pub updated: String,
    checksum: String,
}

impl PlannedEdit {
    pub fn is_changed(&self) -> bool {
        self.original != self.updated
    }

    /// Unified diff of the planned change; empty when nothing changes.
    pub fn diff(&self) -> String {
        diff::unified(&self.display_path, &self.original, &self.updated)
    }
}

/// All planned edits for one version.
#[derive(Debug, Clone)]
pub struct Plan {
    pub version: VersionString,
    pub edits: Vec<PlannedEdit>,
}

impl Plan {
    /// Summarize the plan without writing anything.
    pub fn report(&self, root: &ProjectRoot, dry_run: bool) -> Report {
        Report {
            version: self.version.to_string(),
            root: root.to_string(),
            dry_run,
            files: self.edits.iter().map(FileReport::from).collect(),
        }
    }
}

/// Outcome of a run, serializable for `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub version: String,
    pub root: String,
    pub dry_run: bool,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: String,
    pub format: FileFormat,
    pub previous: Option<String>,
    pub changed: bool,
}

impl From<&PlannedEdit> for FileReport {
    fn from(edit: &PlannedEdit) -> Self {
        Self {
            path: edit.display_path.clone(),
            format: edit.target.format,
            previous: edit.previous.clone(),
            changed: edit.is_changed(),
        }
    }
}

impl Synchronizer {
    pub fn new(root: ProjectRoot, targets: TargetTable) -> Self {
        Self { root, targets }
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    pub fn targets(&self) -> &TargetTable {
        &self.targets
    }

    /// Read every target and compute its updated content.
    pub fn plan(&self, version: &VersionString) -> Result<Plan> {
        let edits = self
            .targets
            .iter()
            .map(|target| self.plan_target(target, version))
            .collect::<Result<Vec<_>>>()?;

        Ok(Plan {
            version: version.clone(),
            edits,
        })
    }

    fn plan_target(&self, target: &TargetFile, version: &VersionString) -> Result<PlannedEdit> {
        let path = self.root.resolve(&target.path);
        let display_path = self.root.display_relative(&path);
        debug!(path = %display_path, format = %target.format, "planning update");

        let original = io::read_text(&path)?;
        let editor = target.format.editor();
        let in_file = |source| Error::Edit {
            path: display_path.clone(),
            source,
        };

        let previous = editor.current_version(&original).map_err(in_file)?;
        let updated = editor.apply(&original, version).map_err(in_file)?;

        if let Some(previous) = previous.as_deref() {
            warn_on_downgrade(&display_path, previous, version);
        }

        Ok(PlannedEdit {
            target: target.clone(),
            path,
            display_path,
            previous,
            checksum: compute_content_checksum(&original),
            original,
            updated,
        })
    }

    /// Write every planned edit in order.
    ///
    /// `on_written` is called after each successful write. A file whose
    /// content changed since it was planned aborts the run with
    /// [`Error::ChangedSinceRead`]; files written before it stay written.
    pub fn apply(&self, plan: &Plan, mut on_written: impl FnMut(&PlannedEdit)) -> Result<Report> {
        for edit in &plan.edits {
            if compute_file_checksum(&edit.path)? != edit.checksum {
                return Err(Error::ChangedSinceRead {
                    path: edit.display_path.clone(),
                });
            }

            io::write_text(&edit.path, &edit.updated)?;
            info!(path = %edit.display_path, changed = edit.is_changed(), "wrote version");
            on_written(edit);
        }

        Ok(plan.report(&self.root, false))
    }

    /// Plan and apply in one step.
    pub fn run(&self, version: &VersionString) -> Result<Report> {
        let plan = self.plan(version)?;
        self.apply(&plan, |_| {})
    }
}

fn warn_on_downgrade(path: &str, previous: &str, version: &VersionString) {
    let (Ok(previous), Some(next)) = (semver::Version::parse(previous), version.to_semver()) else {
        return;
    };
    if next < previous {
        warn!(path, from = %previous, to = %next, "version moves backwards");
    }
}
