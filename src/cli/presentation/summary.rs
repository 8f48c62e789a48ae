//! Summary presentation: text mirrors the classic dirsum layout, json is full.

use super::shared::{human_readable_size, label, to_pretty_json};
use crate::error::DirsumError;
use crate::tree::TreeResult;

/// Render a summary as text
///
/// With `files`, every file is listed with its digest (and size when `size`
/// is set), followed by a `--` separator. The directory and aggregate digest
/// always close the output.
pub fn format_summary_text(result: &TreeResult, files: bool, size: bool) -> String {
    let algorithm = result.algorithm().label();
    let mut lines = Vec::new();

    if files {
        for file in result.files() {
            lines.push(file.path().display().to_string());
            lines.push(format!(
                "    - {:<9}{}",
                format!("{}:", algorithm),
                file.digest()
            ));
            if size {
                lines.push(format!(
                    "    - {:<9}{}",
                    "Size:",
                    human_readable_size(file.size())
                ));
            }
        }
        lines.push("--".to_string());
    }

    lines.push(format!("{}{}", label("Directory"), result.root().display()));
    lines.push(format!("{}{}", label(algorithm), result.aggregate_digest()));
    lines.join("\n")
}

pub fn format_summary_json(result: &TreeResult) -> Result<String, DirsumError> {
    let mut value =
        serde_json::to_value(result).map_err(|e| DirsumError::OutputError(e.to_string()))?;
    value["file_count"] = serde_json::json!(result.file_count());
    value["total_size"] = serde_json::json!(result.total_size());
    to_pretty_json(&value)
}
