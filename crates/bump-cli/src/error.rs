//! Error types for bump-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrong number of arguments or an unknown flag
    #[error("Usage: bump-version <version>")]
    Usage,

    /// Error from bump-core
    #[error(transparent)]
    Core(#[from] bump_core::Error),

    /// Error from bump-fs
    #[error(transparent)]
    Fs(#[from] bump_fs::Error),

    /// Report serialization error
    #[error("Failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

impl CliError {
    /// Errors caused by the invocation itself rather than by the project.
    ///
    /// These are printed to stdout as a short message with a hint.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::Usage | Self::Core(bump_core::Error::InvalidVersion { .. })
        )
    }
}
