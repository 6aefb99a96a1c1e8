//! Error types for the line-oriented query driver.

use super::EvaluationError;

/// Errors that can occur while reading, evaluating, or writing queries.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An input line did not contain two integers.
    #[error("Malformed query line {line:?}: {details}")]
    Parse {
        /// The offending input line
        line: String,
        /// What was wrong with it
        details: String,
    },

    /// The engine rejected or failed the query.
    #[error("Evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),

    /// The evaluator job stopped before answering.
    #[error("Evaluator job is no longer running")]
    JobClosed,
}

impl DriverError {
    /// Create a `Parse` error for an input line.
    pub fn parse(line: impl Into<String>, details: impl Into<String>) -> Self {
        DriverError::Parse {
            line: line.into(),
            details: details.into(),
        }
    }
}
