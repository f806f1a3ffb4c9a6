//! Layered feature-selection ansatz.
//!
//! The state preparation alternates a Trotterized evolution of a
//! parameterized Z/ZZ Hamiltonian with an exact X-mixer evolution, on top
//! of a fixed initial superposition (X then H on every wire).
//!
//! # Parameter layout
//!
//! The optimizer treats the parameter vector as an opaque flat array keyed
//! by position, so the slicing order is a contract:
//!
//! - entries `0..2L` are consumed in pairs `(problem_time, mixer_time)`,
//!   one pair per layer;
//! - entries `2L..2L + 2k − 1` parameterize the problem Hamiltonian:
//!   k single-Z coefficients followed by k−1 nearest-neighbour ZZ
//!   coefficients.
//!
//! Total parameter count: `2·n_layers + 2·n_var − 1`.

use ndarray::ArrayView1;

use qso_circuit::{append_x_mixer, Circuit, TrotterEvolution};
use qso_core::{check_ndarray, Hamiltonian, HamiltonianTerm};

use crate::error::{ProblemError, ProblemResult};

/// Default number of ansatz layers.
pub const DEFAULT_LAYERS: usize = 5;
/// Default Trotter step count for the problem evolution.
pub const DEFAULT_TROTTER_STEPS: usize = 5;

/// The layered ansatz over `n_var` qubits.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSelectionAnsatz {
    n_var: usize,
    n_layers: usize,
    trotter_steps: usize,
}

/// Build the ansatz, returning its required parameter count alongside it.
pub fn feature_selection_ansatz(
    n_var: usize,
    n_layers: usize,
    trotter_steps: usize,
) -> (usize, FeatureSelectionAnsatz) {
    let ansatz = FeatureSelectionAnsatz {
        n_var,
        n_layers,
        trotter_steps,
    };
    (ansatz.param_count(), ansatz)
}

impl FeatureSelectionAnsatz {
    /// Number of free parameters: `2·n_layers + 2·n_var − 1`.
    pub fn param_count(&self) -> usize {
        (2 * self.n_layers + 2 * self.n_var).saturating_sub(1)
    }

    /// Number of qubits the prepared state spans.
    pub fn n_var(&self) -> usize {
        self.n_var
    }

    /// Synthesise the state-preparation circuit for a flat parameter vector.
    ///
    /// Fails unless the ansatz spans at least one variable and `params`
    /// has exactly [`param_count`](Self::param_count) entries.
    pub fn circuit(&self, params: &[f64]) -> ProblemResult<Circuit> {
        if self.n_var == 0 {
            return Err(ProblemError::NoVariables);
        }
        check_ndarray("params", &ArrayView1::from(params), &[self.param_count()])?;

        let mut circuit = Circuit::with_size("feature_selection_ansatz", self.n_var as u32);
        for wire in 0..self.n_var as u32 {
            circuit.x(wire)?;
            circuit.h(wire)?;
        }

        let times = &params[..2 * self.n_layers];
        let theta = &params[2 * self.n_layers..];
        // Same Hamiltonian parameters for every layer; only the times vary.
        let problem_h = hamiltonian_ansatz(theta, self.n_var)?;

        for layer in 0..self.n_layers {
            let problem_t = times[2 * layer];
            let mixer_t = times[2 * layer + 1];
            TrotterEvolution::new(&problem_h, problem_t, self.trotter_steps)
                .append_first_order(&mut circuit)?;
            append_x_mixer(&mut circuit, mixer_t)?;
        }

        Ok(circuit)
    }
}

/// The parameterized problem Hamiltonian of the ansatz:
///
///   H(θ) = Σ_{i<k} θ_i Z_i + Σ_{i<k−1} θ_{k+i} Z_i Z_{i+1}
///
/// `n_var` must be at least 1 and `theta` must have exactly `2·n_var − 1`
/// entries.
pub fn hamiltonian_ansatz(theta: &[f64], n_var: usize) -> ProblemResult<Hamiltonian> {
    if n_var == 0 {
        return Err(ProblemError::NoVariables);
    }
    check_ndarray("theta", &ArrayView1::from(theta), &[2 * n_var - 1])?;

    let mut terms = Vec::with_capacity(2 * n_var - 1);
    for i in 0..n_var {
        terms.push(HamiltonianTerm::z(i as u32, theta[i]));
    }
    for i in 0..n_var - 1 {
        terms.push(HamiltonianTerm::zz(
            i as u32,
            (i + 1) as u32,
            theta[n_var + i],
        ));
    }
    Ok(Hamiltonian::from_terms(terms))
}
