//! Project root discovery
//!
//! The root is the nearest ancestor holding both the workspace manifest and
//! the application directory. It is resolved once per run and handed to every
//! update explicitly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Filesystem markers that identify the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMarkers {
    /// File that must exist in the root (the workspace manifest)
    pub manifest: String,
    /// Directory that must sit next to the manifest
    pub directory: String,
}

impl Default for RootMarkers {
    fn default() -> Self {
        Self {
            manifest: "Cargo.toml".to_string(),
            directory: "app".to_string(),
        }
    }
}

impl RootMarkers {
    fn matches(&self, dir: &Path) -> bool {
        dir.join(&self.manifest).exists() && dir.join(&self.directory).is_dir()
    }
}

/// A resolved project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    path: NormalizedPath,
}

impl ProjectRoot {
    /// Use `path` as the root without checking any markers.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: NormalizedPath::new(path),
        }
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// Absolute path of a root-relative, slash-separated file.
    pub fn resolve(&self, relative: &str) -> NormalizedPath {
        self.path.join(relative)
    }

    /// Display form of `path` relative to the root, falling back to the full
    /// path when it lies outside.
    pub fn display_relative(&self, path: &NormalizedPath) -> String {
        path.relative_to(&self.path)
            .map_or_else(|| path.to_string(), |rel| rel.to_string())
    }
}

impl std::fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.path.fmt(f)
    }
}

/// Walk upward from `start` until a directory matches `markers`.
///
/// Stops with [`Error::RootNotFound`] once the filesystem root has been
/// checked without a match.
pub fn find_project_root(start: &Path, markers: &RootMarkers) -> Result<ProjectRoot> {
    let start = dunce::canonicalize(start).map_err(|e| Error::io(start, e))?;
    let mut current: PathBuf = start.clone();

    loop {
        debug!(dir = %current.display(), "checking for project root");
        if markers.matches(&current) {
            debug!(root = %current.display(), "found project root");
            return Ok(ProjectRoot::new(&current));
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    Err(Error::RootNotFound {
        start,
        manifest: markers.manifest.clone(),
        directory: markers.directory.clone(),
    })
}
