//! CLI output: error mapping and exit codes.

use crate::error::{DirsumError, SummaryError};

/// Success, identical trees, or verified digest.
pub const EXIT_OK: i32 = 0;
/// Trees differ or the digest did not match.
pub const EXIT_DIFFERENT: i32 = 1;
/// Any error; no result was produced.
pub const EXIT_ERROR: i32 = 2;

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &DirsumError) -> String {
    match e {
        DirsumError::Summary(err) => match err {
            SummaryError::NotFound { path } => format!(
                "Error: The specified path does not exist - {}",
                path.display()
            ),
            SummaryError::NotADirectory { path } => format!(
                "Error: The specified path is not a directory - {}",
                path.display()
            ),
            SummaryError::FileVanished { path } => {
                format!("Error: File does not exist - {}", path.display())
            }
            SummaryError::ReadFailure { path, source } => {
                format!("Error: Cannot read file - {} ({})", path.display(), source)
            }
        },
        other => format!("Error: {}", other),
    }
}

/// Exit code for a finished command.
pub fn exit_code(success: bool) -> i32 {
    if success {
        EXIT_OK
    } else {
        EXIT_DIFFERENT
    }
}
