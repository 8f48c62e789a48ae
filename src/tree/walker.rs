//! Filesystem walker that enumerates the regular files under a root

use crate::error::SummaryError;
use crate::tree::path;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// A file discovered during enumeration, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// `root` joined with the relative location, as the caller supplied `root`
    pub path: PathBuf,
    /// Ordering key, see [`path::relative_key`]
    pub key: Vec<u8>,
    /// Printable form of `key`, see [`path::display_label`]
    pub label: String,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the filesystem and collect every regular file
    ///
    /// Directories are descended but not returned. Symbolic links are not
    /// descended; a link to a regular file is returned like the file itself.
    /// Returns candidates sorted by key, so the filesystem's own enumeration
    /// order never escapes this function.
    pub fn walk(&self) -> Result<Vec<Candidate>, SummaryError> {
        let mut candidates = Vec::new();

        let walker = WalkDir::new(&self.root).follow_links(false).min_depth(1);

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(&self.root, e))?;
            let entry_path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }

            if file_type.is_symlink() {
                let target = std::fs::metadata(entry_path)
                    .map_err(|e| SummaryError::from_io(entry_path, e))?;
                if !target.is_file() {
                    trace!(path = %entry_path.display(), "Skipping link to non-file");
                    continue;
                }
            } else if !file_type.is_file() {
                debug!(path = %entry_path.display(), "Skipping special file");
                continue;
            }

            let Some(key) = path::relative_key(&self.root, entry_path) else {
                continue;
            };

            candidates.push(Candidate {
                path: entry_path.to_path_buf(),
                label: path::display_label(&key),
                key,
            });
        }

        // Byte-wise order of the raw relative path
        candidates.sort_by(|a, b| a.key.cmp(&b.key));

        Ok(candidates)
    }
}

fn walk_error(root: &Path, err: walkdir::Error) -> SummaryError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    match err.into_io_error() {
        Some(io) => SummaryError::from_io(&path, io),
        None => SummaryError::ReadFailure {
            path,
            source: std::io::Error::new(std::io::ErrorKind::Other, message),
        },
    }
}
