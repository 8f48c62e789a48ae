//! Relative path keys used to order files deterministically

use std::path::{Component, Path};
use unicode_normalization::UnicodeNormalization;

/// Build the sort key for `path` relative to `root`
///
/// The key is the raw bytes of every normal component below `root`, joined
/// with `/` on every platform. Distinct names always give distinct keys, so
/// ordering by it is total.
///
/// Returns `None` if `path` is not under `root` or has no normal components.
pub fn relative_key(root: &Path, path: &Path) -> Option<Vec<u8>> {
    let relative = path.strip_prefix(root).ok()?;

    let mut key = Vec::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            if !key.is_empty() {
                key.push(b'/');
            }
            key.extend_from_slice(name.as_encoded_bytes());
        }
    }

    if key.is_empty() {
        return None;
    }

    Some(key)
}

/// Human readable form of a sort key: lossy UTF-8, NFC normalized.
///
/// Two keys may share a label; only the key itself identifies a file.
pub fn display_label(key: &[u8]) -> String {
    String::from_utf8_lossy(key).nfc().collect()
}
