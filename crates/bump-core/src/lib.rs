//! Core of bump-version
//!
//! Validates a release version and rewrites it across a fixed table of
//! project manifests, one format-specific editor per file.

pub mod diff;
pub mod editors;
pub mod error;
pub mod format;
pub mod sync;
pub mod targets;
pub mod version;

pub use editors::VersionEditor;
pub use error::{EditError, Error, Result};
pub use format::FileFormat;
pub use sync::{FileReport, Plan, PlannedEdit, Report, Synchronizer};
pub use targets::{TargetFile, TargetTable};
pub use version::VersionString;
