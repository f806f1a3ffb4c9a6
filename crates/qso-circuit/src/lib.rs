//! `qso-circuit` — circuits and their simulated evaluation.
//!
//! Provides the gate-list [`Circuit`] builder, synthesis of Hamiltonian time
//! evolution onto circuits (first-order Trotter for problem Hamiltonians,
//! exact evolution for the commuting X mixer), and a [`Statevector`] engine
//! that evaluates exact and shot-sampled expectation values of
//! sum-of-Paulis Hamiltonians.
//!
//! # Quick start
//!
//! ```rust
//! use qso_circuit::{Circuit, Statevector};
//! use qso_core::{Hamiltonian, HamiltonianTerm};
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//! circuit.h(0).unwrap();
//! circuit.cx(0, 1).unwrap();
//!
//! let mut state = Statevector::new(2);
//! state.run(&circuit).unwrap();
//!
//! // ⟨Z₀Z₁⟩ = 1 on the Bell state.
//! let h = Hamiltonian::from_terms(vec![HamiltonianTerm::zz(0, 1, 1.0)]);
//! let e = state.expectation(&h).unwrap();
//! assert!((e - 1.0).abs() < 1e-10);
//! ```

pub mod circuit;
pub mod error;
pub mod evolution;
pub mod statevector;

pub use circuit::{Circuit, Gate};
pub use error::{CircuitError, CircuitResult};
pub use evolution::{append_exp_pauli, append_x_mixer, TrotterEvolution};
pub use statevector::Statevector;
