//! Tree summarizer: enumerates, digests, and aggregates a directory tree

use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::tree::hasher::{self, Accumulator, Algorithm};
use crate::tree::record::{FileRecord, TreeResult};
use crate::tree::walker::{Candidate, Walker};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace, warn};

/// Default number of files read per parallel batch
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// A file whose contents have been read and digested but not yet folded
struct ReadFile {
    record: FileRecord,
    bytes: Vec<u8>,
}

/// Summarizer for directory trees
#[derive(Debug, Clone)]
pub struct TreeSummarizer {
    algorithm: Algorithm,
    jobs: usize,
    batch_size: usize,
}

impl Default for TreeSummarizer {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl TreeSummarizer {
    /// Sequential summarizer using `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            jobs: 1,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn from_config(config: &SummaryConfig) -> Self {
        Self::new(config.algorithm)
            .with_jobs(config.jobs)
            .with_batch_size(config.batch_size)
    }

    /// Number of worker threads used to read and digest files. `1` is sequential.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Files read concurrently before their bytes are folded into the aggregate.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Summarize the tree rooted at `root`
    ///
    /// Fails with `NotFound` or `NotADirectory` before touching any file. Any
    /// file that vanishes or cannot be read aborts the whole run.
    #[instrument(skip(self, root), fields(root = %root.display(), algorithm = %self.algorithm))]
    pub fn summarize(&self, root: &Path) -> Result<TreeResult, SummaryError> {
        let start = Instant::now();
        info!("Starting tree summary");

        let result = check_root(root)
            .and_then(|()| self.enumerate(root))
            .and_then(|candidates| self.aggregate(root, &candidates));

        match &result {
            Ok(tree) => info!(
                file_count = tree.file_count(),
                total_size = tree.total_size(),
                digest = %tree.aggregate_digest(),
                duration_ms = start.elapsed().as_millis(),
                "Tree summary completed"
            ),
            Err(e) => error!(path = %e.path().display(), "Tree summary failed: {}", e),
        }

        result
    }

    /// Enumerate the files under `root`, sorted by relative key.
    pub fn enumerate(&self, root: &Path) -> Result<Vec<Candidate>, SummaryError> {
        let candidates = Walker::new(root.to_path_buf()).walk()?;
        debug!(file_count = candidates.len(), "Walked filesystem");
        Ok(candidates)
    }

    /// Read, digest, and fold already-enumerated candidates
    ///
    /// `candidates` must be sorted by key, as [`Self::enumerate`] returns them.
    /// Bytes enter the aggregate strictly in that order whatever `jobs` is.
    pub fn aggregate(
        &self,
        root: &Path,
        candidates: &[Candidate],
    ) -> Result<TreeResult, SummaryError> {
        debug_assert!(candidates.windows(2).all(|w| w[0].key < w[1].key));

        let mut aggregate = Accumulator::new(self.algorithm);
        let mut files = Vec::with_capacity(candidates.len());

        match self.thread_pool() {
            Some(pool) => {
                for batch in candidates.chunks(self.batch_size) {
                    let results: Vec<Result<Option<ReadFile>, SummaryError>> = pool.install(|| {
                        batch
                            .par_iter()
                            .map(|candidate| read_file(candidate, self.algorithm))
                            .collect()
                    });
                    // Ordered fold on this thread; first error in key order wins
                    for result in results {
                        if let Some(read) = result? {
                            fold(read, &mut aggregate, &mut files);
                        }
                    }
                }
            }
            None => {
                for candidate in candidates {
                    if let Some(read) = read_file(candidate, self.algorithm)? {
                        fold(read, &mut aggregate, &mut files);
                    }
                }
            }
        }

        Ok(TreeResult::new(
            root.to_path_buf(),
            self.algorithm,
            files,
            aggregate.finalize(),
        ))
    }

    fn thread_pool(&self) -> Option<rayon::ThreadPool> {
        if self.jobs <= 1 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .thread_name(|i| format!("dirsum-worker-{}", i))
            .build()
        {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("Failed to start worker pool, hashing sequentially: {}", e);
                None
            }
        }
    }
}

/// Summarize `root` with the default algorithm, sequentially.
pub fn summarize(root: &Path) -> Result<TreeResult, SummaryError> {
    TreeSummarizer::default().summarize(root)
}

fn check_root(root: &Path) -> Result<(), SummaryError> {
    match std::fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(SummaryError::NotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(SummaryError::NotFound {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(SummaryError::ReadFailure {
            path: root.to_path_buf(),
            source: e,
        }),
    }
}

/// Read one candidate fully. `None` means it turned into a directory.
fn read_file(candidate: &Candidate, algorithm: Algorithm) -> Result<Option<ReadFile>, SummaryError> {
    let path = &candidate.path;
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) if path.is_dir() => {
            trace!(path = %path.display(), "Entry became a directory, skipping");
            return Ok(None);
        }
        Err(e) => return Err(SummaryError::from_io(path, e)),
    };

    let digest = hasher::digest(algorithm, &bytes);
    trace!(path = %path.display(), size = bytes.len(), digest = %digest, "Hashed file");

    let record = FileRecord::new(
        path.clone(),
        candidate.key.clone(),
        candidate.label.clone(),
        digest,
        bytes.len() as u64,
    );
    Ok(Some(ReadFile { record, bytes }))
}

fn fold(read: ReadFile, aggregate: &mut Accumulator, files: &mut Vec<FileRecord>) {
    aggregate.update(&read.bytes);
    files.push(read.record);
}
