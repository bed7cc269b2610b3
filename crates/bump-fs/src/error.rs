//! Error types for bump-fs

use std::path::PathBuf;

/// Result type for bump-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bump-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Could not find project root above {start} (looking for {manifest} next to {directory}/)"
    )]
    RootNotFound {
        start: PathBuf,
        manifest: String,
        directory: String,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Wrap an I/O error, promoting `NotFound` to [`Error::FileNotFound`].
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound { path };
        }
        Self::Io { path, source }
    }
}
