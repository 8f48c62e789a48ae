//! Result types produced by a summary run

use crate::tree::hasher::{Algorithm, Digest};
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Path, digest, and size of one regular file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    #[serde(serialize_with = "serialize_path")]
    path: PathBuf,
    #[serde(skip)]
    key: Vec<u8>,
    #[serde(skip)]
    label: String,
    digest: Digest,
    size: u64,
}

impl FileRecord {
    pub fn new(path: PathBuf, key: Vec<u8>, label: String, digest: Digest, size: u64) -> Self {
        Self {
            path,
            key,
            label,
            digest,
            size,
        }
    }

    /// Location of the file under the scanned root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw relative path bytes; the ordering key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Relative path for display. Not unique, see [`crate::tree::path::display_label`].
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Summary of a whole directory tree
///
/// `files` is sorted ascending by [`FileRecord::key`], and the aggregate digest
/// is the fold of every file's contents in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeResult {
    #[serde(serialize_with = "serialize_path")]
    root: PathBuf,
    algorithm: Algorithm,
    files: Vec<FileRecord>,
    #[serde(rename = "digest")]
    aggregate_digest: Digest,
}

impl TreeResult {
    pub(crate) fn new(
        root: PathBuf,
        algorithm: Algorithm,
        files: Vec<FileRecord>,
        aggregate_digest: Digest,
    ) -> Self {
        Self {
            root,
            algorithm,
            files,
            aggregate_digest,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn aggregate_digest(&self) -> &Digest {
        &self.aggregate_digest
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }
}

fn serialize_path<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
