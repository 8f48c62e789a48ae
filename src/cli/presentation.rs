//! CLI presentation: text and json formatters per command.

mod compare;
mod shared;
mod summary;
mod verify;

pub use compare::{format_comparison_json, format_comparison_text};
pub use shared::human_readable_size;
pub use summary::{format_summary_json, format_summary_text};
pub use verify::{format_verify_json, format_verify_text, VerifyOutcome};
