//! Error types for the circuit crate.

use thiserror::Error;

/// Errors produced by circuit construction and evaluation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// A gate or Pauli string references a qubit outside the circuit.
    #[error("qubit {qubit} out of range for a {n_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: u32,
        /// Width of the circuit.
        n_qubits: u32,
    },

    /// A two-qubit gate was given the same qubit twice.
    #[error("duplicate qubit {0} in two-qubit gate")]
    DuplicateQubit(u32),

    /// Evolution was requested for a Hamiltonian with no terms.
    #[error("Hamiltonian is empty — no terms to evolve")]
    EmptyHamiltonian,

    /// Trotter step count must be ≥ 1.
    #[error("n_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// A circuit was run on a statevector of a different width.
    #[error("circuit has {circuit} qubits but statevector has {state}")]
    WidthMismatch {
        /// Width of the circuit.
        circuit: u32,
        /// Width of the statevector.
        state: u32,
    },

    /// Shot count must be ≥ 1 for sampled expectation values.
    #[error("shots must be at least 1, got {0}")]
    InvalidShots(u32),
}

/// Result type for circuit operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
