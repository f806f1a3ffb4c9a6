//! Error types for run-log loading.

use thiserror::Error;

/// Errors produced while loading or viewing a run log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunsError {
    /// Reading the log file failed.
    #[error("failed to read run log: {0}")]
    Io(#[from] std::io::Error),

    /// The log file is not valid JSON or is missing required fields.
    #[error("failed to parse run log: {0}")]
    Json(#[from] serde_json::Error),

    /// A `params` string is not a numeric literal expression.
    #[error("invalid params literal: {0}")]
    LiteralDecode(String),

    /// An unknown x-axis name was requested.
    #[error("invalid axis type, got {0}")]
    InvalidAxis(String),

    /// Iterations disagree on the parameter count.
    #[error(
        "iteration {iteration} has {found} params, expected {expected} from the first iteration"
    )]
    RaggedParams {
        expected: usize,
        found: usize,
        iteration: usize,
    },
}

/// Result type for run-log operations.
pub type RunsResult<T> = Result<T, RunsError>;
