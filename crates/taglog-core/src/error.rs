//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] taglog_config::ConfigError),

    /// Changelog error.
    #[error("changelog error: {0}")]
    Changelog(#[from] taglog_changelog::ChangelogError),

    /// A parse task panicked or was aborted.
    #[error("parse task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that was read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// An input file is not valid JSON of the expected shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The file that was parsed.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
