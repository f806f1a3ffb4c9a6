//! `qso-problem` — feature-selection QUBO problems.
//!
//! Builds a correlation-based objective matrix from paired feature/response
//! samples, maps it onto an Ising Hamiltonian, and defines the layered
//! ansatz whose parameters the optimizer tunes.  [`FeatureSelectionProblem`]
//! ties the pieces together: every call to its `sample_hamiltonian`
//! bootstraps the data under a fresh child key and re-derives the
//! Hamiltonian, so the optimizer sees a stochastic family of objectives.
//!
//! # Quick start
//!
//! ```rust
//! use ndarray::array;
//! use qso_core::{PrngKey, QsoProblem};
//! use qso_problem::FeatureSelectionProblem;
//!
//! let x = array![[0.1, 1.2], [0.8, 0.4], [1.3, 2.1], [0.2, 0.7]];
//! let y = array![0.3, 0.9, 1.4, 0.1];
//! let mut problem = FeatureSelectionProblem::new(x, y, 0.5, PrngKey::new(0)).unwrap();
//! let h = problem.sample_hamiltonian().unwrap();
//! assert_eq!(h.min_qubits(), 2);
//! ```

pub mod ansatz;
pub mod data;
pub mod error;
pub mod feature_selection;
pub mod objective;
pub mod qubo;

pub use ansatz::{
    feature_selection_ansatz, hamiltonian_ansatz, FeatureSelectionAnsatz, DEFAULT_LAYERS,
    DEFAULT_TROTTER_STEPS,
};
pub use data::{random_linearly_correlated_data, resample_data};
pub use error::{ProblemError, ProblemResult};
pub use feature_selection::FeatureSelectionProblem;
pub use objective::objective_matrix;
pub use qubo::qubo_hamiltonian;
