//! `qso-core` — shared foundations of the QSO harness.
//!
//! Provides the sum-of-Paulis Hamiltonian representation produced by the
//! problem layer and consumed by the circuit layer, the shape-validation
//! helpers used to enforce array contracts at module boundaries, and the
//! splittable [`PrngKey`] value type that threads reproducible randomness
//! through every stochastic component.
//!
//! # Quick start
//!
//! ```rust
//! use qso_core::{Hamiltonian, HamiltonianTerm};
//!
//! // H = -0.5·Z₀ + 0.25·Z₀Z₁
//! let h = Hamiltonian::from_terms(vec![
//!     HamiltonianTerm::z(0, -0.5),
//!     HamiltonianTerm::zz(0, 1, 0.25),
//! ]);
//! assert_eq!(h.n_terms(), 2);
//! assert_eq!(h.min_qubits(), 2);
//! ```

pub mod error;
pub mod hamiltonian;
pub mod key;
pub mod problem;
pub mod validation;

pub use error::{CoreError, CoreResult};
pub use hamiltonian::{Hamiltonian, HamiltonianTerm, PauliOp, PauliString};
pub use key::PrngKey;
pub use problem::QsoProblem;
pub use validation::{check_ndarray, check_ndim};
