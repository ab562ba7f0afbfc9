//! CLI error type

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Startup and driver-level failures.
///
/// Per-file failures never surface here; the processor logs and absorbs
/// them so one broken note cannot stop the run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid name pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to load config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Fs(#[from] note_fs::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
