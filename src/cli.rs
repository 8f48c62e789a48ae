//! CLI domain: parse, route, output, and presentation only.
//! Tree summaries themselves live in `crate::tree`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error, EXIT_DIFFERENT, EXIT_ERROR, EXIT_OK};
pub use parse::{Cli, Commands, HashArgs};
pub use presentation::{
    format_comparison_json, format_comparison_text, format_summary_json, format_summary_text,
    format_verify_json, format_verify_text, human_readable_size, VerifyOutcome,
};
pub use route::{CommandOutput, RunContext};
