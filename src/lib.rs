//! dirsum: Deterministic Directory Digests
//!
//! Computes a per-file digest and size for every regular file under a
//! directory, plus one aggregate digest over the contents of all files taken
//! in byte-wise path order. The aggregate is reproducible across runs and
//! machines, so two trees can be compared without transferring their contents.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;

pub use error::{DirsumError, SummaryError};
pub use tree::{summarize, Algorithm, Digest, FileRecord, TreeResult, TreeSummarizer};
