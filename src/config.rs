//! Configuration System
//!
//! Layered configuration for summary runs, output rendering, and logging.
//! Sources are merged lowest-precedence first: built-in defaults, the global
//! config file, an explicit `--config` file, then `DIRSUM__*` environment
//! variables. CLI flags are applied on top by the caller.

use crate::logging::LoggingConfig;
use crate::tree::hasher::Algorithm;
use crate::tree::summary::DEFAULT_BATCH_SIZE;
use serde::{Deserialize, Serialize};
use std::fmt;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirsumConfig {
    /// How trees are hashed
    #[serde(default)]
    pub summary: SummaryConfig,

    /// How results are rendered
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Summary run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Digest algorithm for per-file and aggregate digests
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Worker threads for reading and digesting files (1 = sequential)
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Files read per parallel batch before folding into the aggregate
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_jobs() -> usize {
    1
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            jobs: default_jobs(),
            batch_size: default_batch_size(),
        }
    }
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.jobs == 0 {
            return Err("jobs must be at least 1".to_string());
        }
        if self.batch_size == 0 {
            return Err("batch_size must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Rendering format for command output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// List every file with its digest
    #[serde(default)]
    pub files: bool,

    /// Include file sizes when listing files
    #[serde(default)]
    pub size: bool,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Summary(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Summary(msg) => write!(f, "summary: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirsumConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.summary.validate() {
            errors.push(ValidationError::Summary(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
