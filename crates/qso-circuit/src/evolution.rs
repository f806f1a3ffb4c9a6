//! Hamiltonian time-evolution synthesis.
//!
//! Appends the gate sequence for `exp(-i H t)` onto a circuit.  Problem
//! Hamiltonians are synthesised with the first-order Trotter product
//! formula; the X mixer commutes term-wise and is evolved exactly.
//!
//! A single Pauli-string exponential uses the standard identity
//!
//!   exp(-i θ/2 · Z⊗Z⊗…⊗Z) = CNOT_ladder · Rz(θ) · CNOT_ladder†
//!
//! with basis rotations before/after for X and Y factors
//! (X → H·Z·H, Y → Sdg·H·Z·H·S).

use tracing::debug;

use qso_core::{Hamiltonian, HamiltonianTerm, PauliOp};

use crate::circuit::Circuit;
use crate::error::{CircuitError, CircuitResult};

/// Append the gates for `exp(-i · coeff · t · P)` to `circuit`.
///
/// Identity strings are a no-op (global phase, unobservable).
pub fn append_exp_pauli(circuit: &mut Circuit, term: &HamiltonianTerm, t: f64) -> CircuitResult<()> {
    let ops = term.pauli.ops();
    if ops.is_empty() {
        return Ok(());
    }

    // Rz(θ) implements exp(-i θ/2 Z), so θ = 2·coeff·t.
    let theta = 2.0 * term.coeff * t;

    basis_change(circuit, ops, false)?;

    let qubits: Vec<u32> = ops.iter().map(|(q, _)| *q).collect();
    for w in qubits.windows(2) {
        circuit.cx(w[0], w[1])?;
    }

    circuit.rz(theta, *qubits.last().expect("non-empty checked above"))?;

    for w in qubits.windows(2).rev() {
        circuit.cx(w[0], w[1])?;
    }
    basis_change(circuit, ops, true)?;

    Ok(())
}

/// Append the exact evolution of the uniform X mixer, `exp(-i t Σ X_i)`.
///
/// The terms commute, so the product of per-qubit `Rx(2t)` rotations is
/// exact rather than a Trotter approximation.
pub fn append_x_mixer(circuit: &mut Circuit, t: f64) -> CircuitResult<()> {
    for q in 0..circuit.num_qubits() {
        circuit.rx(2.0 * t, q)?;
    }
    Ok(())
}

/// First-order Trotter product-formula synthesiser.
///
/// Approximates `exp(-i H t)` by `n_steps` sweeps over every term with step
/// `t / n_steps`; error O(t²/n).
pub struct TrotterEvolution<'a> {
    hamiltonian: &'a Hamiltonian,
    /// Total evolution time t.
    t: f64,
    /// Number of Trotter slices.
    n_steps: usize,
}

impl<'a> TrotterEvolution<'a> {
    /// Construct a synthesiser for `exp(-i H t)`.
    pub fn new(hamiltonian: &'a Hamiltonian, t: f64, n_steps: usize) -> Self {
        Self {
            hamiltonian,
            t,
            n_steps,
        }
    }

    /// Append the first-order Trotter sequence onto an existing circuit.
    pub fn append_first_order(&self, circuit: &mut Circuit) -> CircuitResult<()> {
        self.validate()?;
        let step_t = self.t / self.n_steps as f64;

        debug!(
            n_terms = self.hamiltonian.n_terms(),
            n_steps = self.n_steps,
            n_qubits = circuit.num_qubits(),
            "appending first-order Trotter evolution"
        );

        for _ in 0..self.n_steps {
            for term in self.hamiltonian.terms() {
                append_exp_pauli(circuit, term, step_t)?;
            }
        }
        Ok(())
    }

    /// Synthesise a fresh first-order Trotter circuit.
    ///
    /// The circuit width is inferred from the highest qubit index in the
    /// Hamiltonian.
    pub fn first_order(&self) -> CircuitResult<Circuit> {
        self.validate()?;
        let mut circuit = Circuit::with_size("trotter1", self.hamiltonian.min_qubits());
        self.append_first_order(&mut circuit)?;
        Ok(circuit)
    }

    fn validate(&self) -> CircuitResult<()> {
        if self.hamiltonian.n_terms() == 0 {
            return Err(CircuitError::EmptyHamiltonian);
        }
        if self.n_steps == 0 {
            return Err(CircuitError::InvalidSteps(0));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Apply basis-change gates diagonalising each Pauli factor into Z.
///
/// Forward (`undo = false`): X → H, Y → Sdg·H.
/// Reverse (`undo = true`): X → H, Y → H·S.
fn basis_change(circuit: &mut Circuit, ops: &[(u32, PauliOp)], undo: bool) -> CircuitResult<()> {
    for &(q, op) in ops {
        match (op, undo) {
            (PauliOp::X, _) => {
                circuit.h(q)?;
            }
            (PauliOp::Y, false) => {
                circuit.sdg(q)?;
                circuit.h(q)?;
            }
            (PauliOp::Y, true) => {
                circuit.h(q)?;
                circuit.s(q)?;
            }
            (PauliOp::Z | PauliOp::I, _) => {}
        }
    }
    Ok(())
}
