//! dirsum CLI Binary
//!
//! Command-line interface for deterministic directory tree digests.

use clap::Parser;
use dirsum::cli::{exit_code, map_error, Cli, RunContext, EXIT_ERROR};
use dirsum::config::DirsumConfig;
use dirsum::error::DirsumError;
use dirsum::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(cli.config.clone()) {
        Ok(context) => context,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };

    let logging_config = match build_logging_config(&cli, context.config()) {
        Ok(logging_config) => logging_config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    };
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_ERROR);
    }

    info!("dirsum starting");

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output.text);
            process::exit(exit_code(output.success));
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_ERROR);
        }
    }
}

/// Build logging configuration from the loaded config and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &DirsumConfig) -> Result<LoggingConfig, DirsumError> {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging.validate().map_err(DirsumError::ConfigError)?;
    Ok(logging)
}
