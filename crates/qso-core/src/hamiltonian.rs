//! Hamiltonian data structures.
//!
//! A Hamiltonian is a weighted sum of Pauli strings,
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators and
//! c_k ∈ ℝ.  The QUBO mapping in `qso-problem` emits every pairwise term in
//! both qubit orderings; [`Hamiltonian::simplify`] merges those duplicates
//! before the Hamiltonian reaches the circuit layer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Coefficients with magnitude at or below this are dropped by `simplify`.
const SIMPLIFY_EPS: f64 = 1e-12;

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity — contributes a global phase; omitted from strings.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a `Vec<(qubit, PauliOp)>` sorted by qubit index with identity
/// factors omitted, so two strings that act identically compare equal
/// regardless of construction order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Build a Pauli string from (qubit, op) pairs.
    ///
    /// Identity factors are dropped; the rest are sorted by qubit index.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// A single-qubit Z string.
    pub fn z(qubit: u32) -> Self {
        Self::from_ops([(qubit, PauliOp::Z)])
    }

    /// A Z⊗Z⊗…⊗Z string over the given qubits.
    pub fn zz(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(qubits.into_iter().map(|q| (q, PauliOp::Z)))
    }

    /// The non-identity (qubit, op) factors, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// True if the string has no non-identity factors.
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// True if every factor is a Pauli-Z.
    pub fn is_diagonal(&self) -> bool {
        self.ops.iter().all(|(_, op)| *op == PauliOp::Z)
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }
}

/// A single weighted Pauli term: `coeff · pauli`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HamiltonianTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub pauli: PauliString,
}

impl HamiltonianTerm {
    /// Create a new term.
    pub fn new(coeff: f64, pauli: PauliString) -> Self {
        Self { coeff, pauli }
    }

    /// Shorthand: single-qubit Z term.
    pub fn z(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::z(qubit))
    }

    /// Shorthand: ZZ coupling term.
    pub fn zz(q0: u32, q1: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::zz([q0, q1]))
    }

    /// Shorthand: single-qubit X term.
    pub fn x(qubit: u32, coeff: f64) -> Self {
        Self::new(coeff, PauliString::from_ops([(qubit, PauliOp::X)]))
    }
}

/// A sum-of-Pauli-strings Hamiltonian.
///
/// H = Σ_k  c_k · P_k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hamiltonian {
    terms: Vec<HamiltonianTerm>,
}

impl Hamiltonian {
    /// Create from a list of terms.
    pub fn from_terms(terms: impl IntoIterator<Item = HamiltonianTerm>) -> Self {
        Self {
            terms: terms.into_iter().collect(),
        }
    }

    /// The uniform X mixer over `n_var` qubits: B = Σ_i X_i.
    pub fn x_mixer(n_var: u32) -> Self {
        (0..n_var).map(|q| HamiltonianTerm::x(q, 1.0)).collect()
    }

    /// All terms.
    pub fn terms(&self) -> &[HamiltonianTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Σ |c_k| — an upper bound on the spectral norm.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// True if every term is diagonal in the computational basis.
    pub fn is_diagonal(&self) -> bool {
        self.terms.iter().all(|t| t.pauli.is_diagonal())
    }

    /// The minimum number of qubits required to represent this Hamiltonian.
    ///
    /// Returns 0 if the Hamiltonian is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .iter()
            .filter_map(|t| t.pauli.max_qubit())
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Merge algebraically equal terms and drop vanishing ones.
    ///
    /// Terms with identical Pauli strings have their coefficients summed;
    /// the merged term keeps the position of its first occurrence.  Terms
    /// whose merged coefficient has magnitude ≤ 1e-12, and pure identity
    /// strings, are removed.
    #[must_use]
    pub fn simplify(self) -> Self {
        let mut order: Vec<PauliString> = Vec::with_capacity(self.terms.len());
        let mut merged: FxHashMap<PauliString, f64> = FxHashMap::default();

        for term in self.terms {
            if term.pauli.is_identity() {
                continue;
            }
            match merged.get_mut(&term.pauli) {
                Some(c) => *c += term.coeff,
                None => {
                    merged.insert(term.pauli.clone(), term.coeff);
                    order.push(term.pauli);
                }
            }
        }

        let terms = order
            .into_iter()
            .filter_map(|pauli| {
                let coeff = merged[&pauli];
                (coeff.abs() > SIMPLIFY_EPS).then(|| HamiltonianTerm::new(coeff, pauli))
            })
            .collect();

        Self { terms }
    }
}

impl FromIterator<HamiltonianTerm> for Hamiltonian {
    fn from_iter<T: IntoIterator<Item = HamiltonianTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}
