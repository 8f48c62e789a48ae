//! Built-in defaults, the lowest-precedence layer.

use crate::tree::summary::DEFAULT_BATCH_SIZE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("summary.algorithm", "sha256")?
        .set_default("summary.jobs", 1i64)?
        .set_default("summary.batch_size", DEFAULT_BATCH_SIZE as i64)?
        .set_default("output.format", "text")?
        .set_default("output.files", false)?
        .set_default("output.size", false)
}
