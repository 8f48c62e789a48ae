//! Error types for directory summarization and the surfaces around it.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures of a single `summarize` run.
///
/// Every variant is fatal: the run stops at the first one and produces no
/// partial result.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Path does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("File vanished before it could be read: {}", path.display())]
    FileVanished { path: PathBuf },

    #[error("Cannot read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SummaryError {
    /// The path the failure refers to.
    pub fn path(&self) -> &Path {
        match self {
            SummaryError::NotFound { path }
            | SummaryError::NotADirectory { path }
            | SummaryError::FileVanished { path }
            | SummaryError::ReadFailure { path, .. } => path,
        }
    }

    /// Classify an I/O error raised while touching `path` during a run.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SummaryError::FileVanished {
                path: path.to_path_buf(),
            }
        } else {
            SummaryError::ReadFailure {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Errors surfaced by the configuration, logging, and CLI layers.
#[derive(Debug, Error)]
pub enum DirsumError {
    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for DirsumError {
    fn from(err: config::ConfigError) -> Self {
        DirsumError::ConfigError(err.to_string())
    }
}
