//! Config loader: merges every source and validates the result.

use super::merge;
use super::sources::{environment, explicit_file, global_file};
use super::DirsumConfig;
use crate::error::DirsumError;
use std::path::Path;
use tracing::debug;

/// Loads [`DirsumConfig`] from all configured sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration
    ///
    /// Precedence (highest last): defaults, global file, `explicit` file,
    /// `DIRSUM__*` environment variables.
    pub fn load(explicit: Option<&Path>) -> Result<DirsumConfig, DirsumError> {
        let mut builder = merge::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder);

        let config: DirsumConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load a single TOML file on top of the defaults, ignoring other sources.
    pub fn load_from_file(path: &Path) -> Result<DirsumConfig, DirsumError> {
        let builder = explicit_file::add_to_builder(merge::builder_with_defaults()?, path)?;
        let config: DirsumConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    fn validated(config: DirsumConfig) -> Result<DirsumConfig, DirsumError> {
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            DirsumError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        debug!(
            algorithm = %config.summary.algorithm,
            jobs = config.summary.jobs,
            "Configuration loaded"
        );
        Ok(config)
    }
}
