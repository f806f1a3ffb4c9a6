//! Error types for the problem crate.

use thiserror::Error;

use qso_circuit::CircuitError;
use qso_core::CoreError;

/// Errors produced by problem construction and ansatz synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProblemError {
    /// An array contract check failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Circuit construction failed.
    #[error(transparent)]
    Circuit(#[from] CircuitError),

    /// The ansatz spans no variables.
    #[error("ansatz requires at least one variable")]
    NoVariables,

    /// `betas` must be empty or carry one entry per fake feature.
    #[error("betas must have length 0 or {expected}, got {actual}")]
    BetasLength {
        /// Number of fake features.
        expected: usize,
        /// Supplied betas length.
        actual: usize,
    },
}

/// Result type for problem operations.
pub type ProblemResult<T> = Result<T, ProblemError>;
