//! Compare presentation.

use super::shared::to_pretty_json;
use crate::error::DirsumError;
use crate::tree::{Algorithm, TreeComparison};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

fn label(name: &str) -> String {
    format!("{:<16}", format!("{}:", name))
}

pub fn format_comparison_text(
    comparison: &TreeComparison,
    left: &Path,
    right: &Path,
    algorithm: Algorithm,
    color: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}{}\n", label("Left"), left.display()));
    out.push_str(&format!("{}{}\n", label("Right"), right.display()));
    out.push_str(&format!(
        "{}{}\n",
        label(&format!("{} left", algorithm.label())),
        comparison.left_digest
    ));
    out.push_str(&format!(
        "{}{}\n",
        label(&format!("{} right", algorithm.label())),
        comparison.right_digest
    ));

    let verdict = if comparison.identical {
        "identical"
    } else {
        "different"
    };
    let verdict = match (color, comparison.identical) {
        (false, _) => verdict.to_string(),
        (true, true) => verdict.green().to_string(),
        (true, false) => verdict.red().to_string(),
    };
    out.push_str(&format!("{}{}", label("Result"), verdict));

    if comparison.added.is_empty() && comparison.removed.is_empty() && comparison.changed.is_empty()
    {
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Change", "Path"]);
    for path in &comparison.removed {
        table.add_row(vec!["removed", path.as_str()]);
    }
    for path in &comparison.added {
        table.add_row(vec!["added", path.as_str()]);
    }
    for path in &comparison.changed {
        table.add_row(vec!["changed", path.as_str()]);
    }
    out.push_str(&format!("\n\n{}", table));
    out
}

pub fn format_comparison_json(
    comparison: &TreeComparison,
    left: &Path,
    right: &Path,
    algorithm: Algorithm,
) -> Result<String, DirsumError> {
    let mut value =
        serde_json::to_value(comparison).map_err(|e| DirsumError::OutputError(e.to_string()))?;
    value["left"] = serde_json::json!(left.to_string_lossy());
    value["right"] = serde_json::json!(right.to_string_lossy());
    value["algorithm"] = serde_json::json!(algorithm.name());
    to_pretty_json(&value)
}
