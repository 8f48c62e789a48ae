//! Directory tree summaries
//!
//! Walks a directory, digests every regular file, and folds the contents of
//! all files into one aggregate digest in a fixed, path-sorted order.

pub mod compare;
pub mod hasher;
pub mod path;
pub mod record;
pub mod summary;
pub mod walker;

pub use compare::{compare, TreeComparison};
pub use hasher::{Accumulator, Algorithm, Digest};
pub use record::{FileRecord, TreeResult};
pub use summary::{summarize, TreeSummarizer};
