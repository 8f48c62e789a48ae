//! CLI parse: clap types for dirsum. No behavior; definitions only.

use crate::config::OutputFormat;
use crate::tree::hasher::Algorithm;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// dirsum - deterministic digests of directory trees
#[derive(Parser, Debug)]
#[command(name = "dirsum", version)]
#[command(about = "Deterministic, content-addressed digests of directory trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (layered over the global config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable logging
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Options shared by every command that hashes a tree
#[derive(Args, Debug, Clone, Default)]
pub struct HashArgs {
    /// Digest algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Worker threads for reading and digesting files
    #[arg(long, short)]
    pub jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the aggregate digest of a directory
    Summarize {
        /// The directory to traverse
        path: PathBuf,
        /// Display a digest for each file
        #[arg(long)]
        files: bool,
        /// Display the size for each file
        #[arg(long)]
        size: bool,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        hash: HashArgs,
    },
    /// Compare two directories file by file
    Compare {
        left: PathBuf,
        right: PathBuf,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        hash: HashArgs,
    },
    /// Check a directory against a known aggregate digest
    Verify {
        path: PathBuf,
        /// Expected aggregate digest (64 hex characters)
        #[arg(long)]
        expect: String,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[command(flatten)]
        hash: HashArgs,
    },
}
