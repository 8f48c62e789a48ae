//! CLI route: run context and command dispatch to tree services and presentation.

use crate::cli::parse::{Commands, HashArgs};
use crate::cli::presentation::{
    format_comparison_json, format_comparison_text, format_summary_json, format_summary_text,
    format_verify_json, format_verify_text, VerifyOutcome,
};
use crate::config::{ConfigLoader, DirsumConfig, OutputFormat};
use crate::error::DirsumError;
use crate::tree::{compare, Digest, TreeSummarizer};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

/// Rendered command result. `success` is false when trees differ or a
/// digest does not match; errors are returned as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }
}

/// Runtime context for CLI execution: merged configuration and terminal traits.
pub struct RunContext {
    config: DirsumConfig,
    color: bool,
}

impl RunContext {
    /// Create run context, loading configuration from every source.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, DirsumError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: DirsumConfig) -> Self {
        Self {
            config,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Force colored output on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &DirsumConfig {
        &self.config
    }

    /// Execute a command and render its output.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, DirsumError> {
        match command {
            Commands::Summarize {
                path,
                files,
                size,
                format,
                hash,
            } => {
                let summarizer = self.summarizer(hash);
                let result = summarizer.summarize(path)?;
                let files = *files || self.config.output.files;
                let size = *size || self.config.output.size;
                let text = match self.format(*format) {
                    OutputFormat::Text => format_summary_text(&result, files, size),
                    OutputFormat::Json => format_summary_json(&result)?,
                };
                Ok(CommandOutput::ok(text))
            }
            Commands::Compare {
                left,
                right,
                format,
                hash,
            } => {
                let summarizer = self.summarizer(hash);
                let left_result = summarizer.summarize(left)?;
                let right_result = summarizer.summarize(right)?;
                let comparison = compare(&left_result, &right_result);
                info!(
                    identical = comparison.identical,
                    added = comparison.added.len(),
                    removed = comparison.removed.len(),
                    changed = comparison.changed.len(),
                    "Comparison completed"
                );
                let text = match self.format(*format) {
                    OutputFormat::Text => format_comparison_text(
                        &comparison,
                        left,
                        right,
                        summarizer.algorithm(),
                        self.color,
                    ),
                    OutputFormat::Json => {
                        format_comparison_json(&comparison, left, right, summarizer.algorithm())?
                    }
                };
                Ok(CommandOutput {
                    text,
                    success: comparison.identical,
                })
            }
            Commands::Verify {
                path,
                expect,
                format,
                hash,
            } => {
                // Reject malformed input before reading any file
                let expected = Digest::from_hex(expect)?;
                let summarizer = self.summarizer(hash);
                let result = summarizer.summarize(path)?;
                let outcome = VerifyOutcome {
                    root: path.clone(),
                    algorithm: summarizer.algorithm(),
                    expected,
                    actual: *result.aggregate_digest(),
                };
                info!(matches = outcome.matches(), "Verification completed");
                let text = match self.format(*format) {
                    OutputFormat::Text => format_verify_text(&outcome),
                    OutputFormat::Json => format_verify_json(&outcome)?,
                };
                Ok(CommandOutput {
                    text,
                    success: outcome.matches(),
                })
            }
        }
    }

    /// Config summary settings with CLI overrides applied.
    fn summarizer(&self, hash: &HashArgs) -> TreeSummarizer {
        let mut summary = self.config.summary.clone();
        if let Some(algorithm) = hash.algorithm {
            summary.algorithm = algorithm;
        }
        if let Some(jobs) = hash.jobs {
            summary.jobs = jobs;
        }
        debug!(
            algorithm = %summary.algorithm,
            jobs = summary.jobs,
            "Resolved summary settings"
        );
        TreeSummarizer::from_config(&summary)
    }

    fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.output.format)
    }
}
