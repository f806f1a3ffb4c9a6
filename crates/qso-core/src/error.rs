//! Error types for the core crate.

use thiserror::Error;

/// Errors produced by core contract checks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An array's shape does not match the expected contract.
    #[error("array `{name}` has shape {actual:?}, expected {expected:?}")]
    ShapeMismatch {
        /// Name of the offending array, as seen by the caller.
        name: String,
        /// The shape required by the contract.
        expected: Vec<usize>,
        /// The shape actually supplied.
        actual: Vec<usize>,
    },

    /// An array that must carry data was empty.
    #[error("array `{name}` is empty")]
    Empty {
        /// Name of the offending array.
        name: String,
    },

    /// An array's dimensionality does not match the expected contract.
    #[error("array `{name}` has {actual} dimension(s), expected {expected}")]
    NdimMismatch {
        /// Name of the offending array.
        name: String,
        /// The dimensionality required by the contract.
        expected: usize,
        /// The dimensionality actually supplied.
        actual: usize,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
