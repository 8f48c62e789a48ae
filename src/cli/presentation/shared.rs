//! Shared presentation helpers.

use crate::error::DirsumError;

/// Decimal (SI) size with the exact byte count, e.g. `1.50 KB - 1500 bytes`.
pub fn human_readable_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1000 {
        return format!("{} bytes", bytes);
    }

    let mut value = bytes as f64 / 1000.0;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    format!("{:.2} {} - {} bytes", value, UNITS[unit], bytes)
}

/// Label column used by the text formatters, e.g. `SHA-256:    `.
pub(super) fn label(name: &str) -> String {
    format!("{:<12}", format!("{}:", name))
}

pub(super) fn to_pretty_json(value: &serde_json::Value) -> Result<String, DirsumError> {
    serde_json::to_string_pretty(value).map_err(|e| DirsumError::OutputError(e.to_string()))
}
