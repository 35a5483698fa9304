//! Result log error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Result log error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Result log error: {} at {}:{}", message, file, line)]
pub struct ResultLogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ResultLogError {
    /// Creates a new result log error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ResultLogError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<csv::Error> for ResultLogError {
    #[track_caller]
    fn from(err: csv::Error) -> Self {
        Self::new(format!("CSV error: {}", err))
    }
}
