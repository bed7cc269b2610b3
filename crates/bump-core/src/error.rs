//! Error types for bump-core

use crate::format::FileFormat;

/// Result type for bump-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing versions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] bump_fs::Error),

    #[error("Invalid version format '{input}'")]
    InvalidVersion { input: String },

    #[error("Failed to update {path}")]
    Edit {
        path: String,
        #[source]
        source: EditError,
    },

    #[error("{path} changed on disk after it was read")]
    ChangedSinceRead { path: String },
}

/// Errors raised by a [`VersionEditor`](crate::VersionEditor) on file content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("Malformed {format} document: {message}")]
    MalformedDocument { format: FileFormat, message: String },

    #[error("No line matching `{pattern}` found")]
    PatternNotFound { pattern: String },
}

impl EditError {
    pub fn malformed(format: FileFormat, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            format,
            message: message.into(),
        }
    }

    pub fn pattern_not_found(pattern: impl Into<String>) -> Self {
        Self::PatternNotFound {
            pattern: pattern.into(),
        }
    }
}
