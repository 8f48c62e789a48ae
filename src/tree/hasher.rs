//! Digest computation for file contents and the tree-wide aggregate
//!
//! SHA-256 is the default algorithm; BLAKE3 is available as an alternative with
//! the same 32-byte output. A run uses one algorithm for every digest it emits.

use crate::error::DirsumError;
use serde::{Deserialize, Serialize};
use sha2::Digest as _;
use std::fmt;

/// Length in bytes of every digest produced by this module.
pub const DIGEST_LEN: usize = 32;

/// Hash algorithm used for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Sha256,
    Blake3,
}

impl Algorithm {
    /// Human-facing label, e.g. `SHA-256`.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Blake3 => "BLAKE3",
        }
    }

    /// Config/CLI name, e.g. `sha256`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 256-bit digest
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 64-character hex string (either case).
    pub fn from_hex(s: &str) -> Result<Self, DirsumError> {
        let trimmed = s.trim();
        let bytes = hex::decode(trimmed)
            .map_err(|e| DirsumError::InvalidDigest(format!("{}: {}", trimmed, e)))?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            DirsumError::InvalidDigest(format!(
                "expected {} bytes, got {}",
                DIGEST_LEN,
                v.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Running digest state. Bytes are folded in the order they are fed.
#[derive(Clone)]
pub enum Accumulator {
    Sha256(sha2::Sha256),
    Blake3(Box<blake3::Hasher>),
}

impl Accumulator {
    pub fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sha256 => Accumulator::Sha256(sha2::Sha256::new()),
            Algorithm::Blake3 => Accumulator::Blake3(Box::new(blake3::Hasher::new())),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Accumulator::Sha256(_) => Algorithm::Sha256,
            Accumulator::Blake3(_) => Algorithm::Blake3,
        }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        match self {
            Accumulator::Sha256(hasher) => hasher.update(bytes),
            Accumulator::Blake3(hasher) => {
                hasher.update(bytes);
            }
        }
    }

    /// Digest of everything fed so far.
    pub fn finalize(self) -> Digest {
        match self {
            Accumulator::Sha256(hasher) => {
                let mut out = [0u8; DIGEST_LEN];
                out.copy_from_slice(&hasher.finalize());
                Digest(out)
            }
            Accumulator::Blake3(hasher) => Digest(*hasher.finalize().as_bytes()),
        }
    }
}

/// One-shot digest of `bytes`.
pub fn digest(algorithm: Algorithm, bytes: &[u8]) -> Digest {
    let mut acc = Accumulator::new(algorithm);
    acc.update(bytes);
    acc.finalize()
}
