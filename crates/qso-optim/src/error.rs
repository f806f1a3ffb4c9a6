//! Error types for the optimizer crate.

use thiserror::Error;

use qso_circuit::CircuitError;
use qso_core::CoreError;
use qso_problem::ProblemError;

/// Errors produced by the optimization driver and run logging.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptimError {
    /// Problem sampling failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Cost-function circuit evaluation failed.
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// Ansatz synthesis failed inside the cost function.
    #[error(transparent)]
    Problem(#[from] ProblemError),

    /// Writing the run log failed.
    #[error("failed to write run log: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the run log failed.
    #[error("failed to serialize run log: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for optimizer operations.
pub type OptimResult<T> = Result<T, OptimError>;
