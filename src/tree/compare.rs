//! Comparison of two tree summaries

use crate::tree::hasher::Digest;
use crate::tree::record::TreeResult;
use serde::Serialize;
use std::cmp::Ordering;

/// Differences between a left and a right tree, keyed by relative path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeComparison {
    /// Aggregate digests are equal
    pub identical: bool,
    pub left_digest: Digest,
    pub right_digest: Digest,
    /// Present only on the right
    pub added: Vec<String>,
    /// Present only on the left
    pub removed: Vec<String>,
    /// Present on both sides with different contents
    pub changed: Vec<String>,
}

impl TreeComparison {
    /// No per-file differences either.
    pub fn is_clean(&self) -> bool {
        self.identical && self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare two summaries produced with the same algorithm.
///
/// Both file lists are already sorted by raw key, so this is a single merge
/// pass. Files are paired on the raw key; results name them by label.
pub fn compare(left: &TreeResult, right: &TreeResult) -> TreeComparison {
    let mut added = Vec::new();
    let mut removed = Vec::new();
    let mut changed = Vec::new();

    let mut l = left.files().iter().peekable();
    let mut r = right.files().iter().peekable();

    loop {
        match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => match a.key().cmp(b.key()) {
                Ordering::Less => {
                    removed.push(a.label().to_string());
                    l.next();
                }
                Ordering::Greater => {
                    added.push(b.label().to_string());
                    r.next();
                }
                Ordering::Equal => {
                    if a.digest() != b.digest() {
                        changed.push(a.label().to_string());
                    }
                    l.next();
                    r.next();
                }
            },
            (Some(a), None) => {
                removed.push(a.label().to_string());
                l.next();
            }
            (None, Some(b)) => {
                added.push(b.label().to_string());
                r.next();
            }
            (None, None) => break,
        }
    }

    TreeComparison {
        identical: left.aggregate_digest() == right.aggregate_digest(),
        left_digest: *left.aggregate_digest(),
        right_digest: *right.aggregate_digest(),
        added,
        removed,
        changed,
    }
}
