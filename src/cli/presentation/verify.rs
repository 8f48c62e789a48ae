//! Verify presentation.

use super::shared::{label, to_pretty_json};
use crate::error::DirsumError;
use crate::tree::{Algorithm, Digest};
use std::path::PathBuf;

/// Result of checking a tree against an expected aggregate digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub root: PathBuf,
    pub algorithm: Algorithm,
    pub expected: Digest,
    pub actual: Digest,
}

impl VerifyOutcome {
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

pub fn format_verify_text(outcome: &VerifyOutcome) -> String {
    if outcome.matches() {
        format!(
            "{}{}\n{}{}",
            label("Verified"),
            outcome.root.display(),
            label(outcome.algorithm.label()),
            outcome.actual
        )
    } else {
        format!(
            "{}{}\n{}{}\n{}{}",
            label("Mismatch"),
            outcome.root.display(),
            label("Expected"),
            outcome.expected,
            label("Actual"),
            outcome.actual
        )
    }
}

pub fn format_verify_json(outcome: &VerifyOutcome) -> Result<String, DirsumError> {
    to_pretty_json(&serde_json::json!({
        "root": outcome.root.to_string_lossy(),
        "algorithm": outcome.algorithm.name(),
        "expected": outcome.expected.to_hex(),
        "actual": outcome.actual.to_hex(),
        "matches": outcome.matches(),
    }))
}
