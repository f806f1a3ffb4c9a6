//! Statevector simulation engine.

use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

use qso_core::{Hamiltonian, PauliOp, PauliString, PrngKey};

use crate::circuit::{Circuit, Gate};
use crate::error::{CircuitError, CircuitResult};

/// A statevector representing an `n`-qubit pure state.
pub struct Statevector {
    /// The 2^n state amplitudes.
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0…0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Execute every gate of `circuit` in order.
    pub fn run(&mut self, circuit: &Circuit) -> CircuitResult<()> {
        if circuit.num_qubits() as usize != self.num_qubits {
            return Err(CircuitError::WidthMismatch {
                circuit: circuit.num_qubits(),
                state: self.num_qubits as u32,
            });
        }
        for gate in circuit.gates() {
            self.apply(gate);
        }
        Ok(())
    }

    fn apply(&mut self, gate: &Gate) {
        match *gate {
            Gate::H(q) => self.apply_h(q as usize),
            Gate::X(q) => self.apply_x(q as usize),
            Gate::S(q) => self.apply_phase(q as usize, FRAC_PI_2),
            Gate::Sdg(q) => self.apply_phase(q as usize, -FRAC_PI_2),
            Gate::Rx { theta, qubit } => self.apply_rx(qubit as usize, theta),
            Gate::Rz { theta, qubit } => self.apply_rz(qubit as usize, theta),
            Gate::Cx { control, target } => self.apply_cx(control as usize, target as usize),
        }
    }

    /// Exact expectation value ⟨ψ|H|ψ⟩ of a sum-of-Paulis Hamiltonian.
    pub fn expectation(&self, hamiltonian: &Hamiltonian) -> CircuitResult<f64> {
        self.check_width(hamiltonian)?;

        let mut total = 0.0;
        for term in hamiltonian.terms() {
            total += term.coeff * self.pauli_expectation(&term.pauli);
        }
        Ok(total)
    }

    /// Shot-based estimate of ⟨ψ|H|ψ⟩.
    ///
    /// Each term is rotated into the computational basis, sampled `shots`
    /// times, and averaged as a ±1 parity over the term's qubits.
    /// Deterministic given `key`.
    pub fn sampled_expectation(
        &self,
        hamiltonian: &Hamiltonian,
        shots: u32,
        key: PrngKey,
    ) -> CircuitResult<f64> {
        self.check_width(hamiltonian)?;
        if shots == 0 {
            return Err(CircuitError::InvalidShots(0));
        }

        let mut rng = key.rng();
        let mut total = 0.0;
        for term in hamiltonian.terms() {
            if term.pauli.is_identity() {
                total += term.coeff;
                continue;
            }

            // Rotate the term's X/Y factors into Z so computational-basis
            // samples carry the term's parity.
            let mut rotated = self.clone_amplitudes();
            for &(q, op) in term.pauli.ops() {
                match op {
                    PauliOp::X => rotated.apply_h(q as usize),
                    PauliOp::Y => {
                        rotated.apply_phase(q as usize, -FRAC_PI_2);
                        rotated.apply_h(q as usize);
                    }
                    PauliOp::Z | PauliOp::I => {}
                }
            }

            let mask: usize = term
                .pauli
                .ops()
                .iter()
                .map(|&(q, _)| 1usize << q)
                .fold(0, |acc, m| acc | m);

            let mut parity_sum = 0i64;
            for _ in 0..shots {
                let outcome = rotated.sample_with(&mut rng);
                let ones = (outcome & mask).count_ones();
                parity_sum += if ones % 2 == 0 { 1 } else { -1 };
            }
            total += term.coeff * parity_sum as f64 / f64::from(shots);
        }
        Ok(total)
    }

    /// Sample a computational-basis outcome using the supplied generator.
    pub fn sample_with<R: Rng>(&self, rng: &mut R) -> usize {
        let r: f64 = rng.gen();
        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }
        // Fallback for accumulated rounding on normalized states.
        self.amplitudes.len() - 1
    }

    fn check_width(&self, hamiltonian: &Hamiltonian) -> CircuitResult<()> {
        let needed = hamiltonian.min_qubits();
        if needed as usize > self.num_qubits {
            return Err(CircuitError::QubitOutOfRange {
                qubit: needed - 1,
                n_qubits: self.num_qubits as u32,
            });
        }
        Ok(())
    }

    /// ⟨ψ|P|ψ⟩ for a single Pauli string.
    fn pauli_expectation(&self, pauli: &PauliString) -> f64 {
        if pauli.is_identity() {
            return 1.0;
        }
        let mut transformed = self.clone_amplitudes();
        for &(q, op) in pauli.ops() {
            match op {
                PauliOp::X => transformed.apply_x(q as usize),
                PauliOp::Y => transformed.apply_y(q as usize),
                PauliOp::Z => transformed.apply_z(q as usize),
                PauliOp::I => {}
            }
        }
        self.amplitudes
            .iter()
            .zip(transformed.amplitudes.iter())
            .map(|(a, b)| (a.conj() * b).re)
            .sum()
    }

    fn clone_amplitudes(&self) -> Self {
        Self {
            amplitudes: self.amplitudes.clone(),
            num_qubits: self.num_qubits,
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    fn apply_x(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1 << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..(1 << self.num_qubits) {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_rx(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        let neg_i_s = Complex64::new(0.0, -s);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = c * a + neg_i_s * b;
                self.amplitudes[j] = neg_i_s * a + c * b;
            }
        }
    }

    fn apply_rz(&mut self, qubit: usize, theta: f64) {
        let mask = 1 << qubit;
        let phase_0 = Complex64::from_polar(1.0, -theta / 2.0);
        let phase_1 = Complex64::from_polar(1.0, theta / 2.0);
        for i in 0..(1 << self.num_qubits) {
            if i & mask == 0 {
                self.amplitudes[i] *= phase_0;
            } else {
                self.amplitudes[i] *= phase_1;
            }
        }
    }

    fn apply_cx(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..(1 << self.num_qubits) {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qso_core::HamiltonianTerm;
    use rand::SeedableRng;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes[0].re, 1.0));
        assert!(sv.amplitudes[1..].iter().all(|a| a.norm() < 1e-15));
    }

    #[test]
    fn test_z_expectation_on_basis_states() {
        // |0⟩: ⟨Z⟩ = +1; after X, |1⟩: ⟨Z⟩ = -1.
        let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
        let mut sv = Statevector::new(1);
        assert!(approx_eq(sv.expectation(&h).unwrap(), 1.0));
        sv.apply_x(0);
        assert!(approx_eq(sv.expectation(&h).unwrap(), -1.0));
    }

    #[test]
    fn test_x_expectation_on_plus_state() {
        let h = Hamiltonian::from_terms(vec![HamiltonianTerm::x(0, 1.0)]);
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        assert!(approx_eq(sv.expectation(&h).unwrap(), 1.0));
    }

    #[test]
    fn test_bell_state_zz() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);
        let h = Hamiltonian::from_terms(vec![HamiltonianTerm::zz(0, 1, 1.0)]);
        assert!(approx_eq(sv.expectation(&h).unwrap(), 1.0));
        // Single-qubit ⟨Z⟩ vanishes on a Bell state.
        let z0 = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
        assert!(approx_eq(sv.expectation(&z0).unwrap(), 0.0));
    }

    #[test]
    fn test_rz_phase_only() {
        let mut sv = Statevector::new(1);
        sv.apply_h(0);
        sv.apply_rz(0, 0.7);
        // Rz leaves |⟨0|ψ⟩|² untouched.
        assert!(approx_eq(sv.amplitudes[0].norm_sqr(), 0.5));
    }

    #[test]
    fn test_sample_deterministic_state() {
        let mut sv = Statevector::new(1);
        sv.apply_x(0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(sv.sample_with(&mut rng), 1);
        }
    }

    #[test]
    fn test_sampled_expectation_reproducible() {
        let mut sv = Statevector::new(2);
        sv.apply_h(0);
        sv.apply_cx(0, 1);
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::z(0, -0.5),
            HamiltonianTerm::zz(0, 1, 0.25),
        ]);
        let a = sv.sampled_expectation(&h, 256, PrngKey::new(11)).unwrap();
        let b = sv.sampled_expectation(&h, 256, PrngKey::new(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sampled_expectation_matches_exact_on_eigenstate() {
        // |11⟩ is a Z-parity eigenstate, so shot noise vanishes.
        let mut sv = Statevector::new(2);
        sv.apply_x(0);
        sv.apply_x(1);
        let h = Hamiltonian::from_terms(vec![
            HamiltonianTerm::z(0, 1.0),
            HamiltonianTerm::zz(0, 1, 2.0),
        ]);
        let exact = sv.expectation(&h).unwrap();
        let sampled = sv.sampled_expectation(&h, 64, PrngKey::new(0)).unwrap();
        assert!(approx_eq(exact, sampled));
    }

    #[test]
    fn test_zero_shots_rejected() {
        let sv = Statevector::new(1);
        let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
        assert!(matches!(
            sv.sampled_expectation(&h, 0, PrngKey::new(0)),
            Err(CircuitError::InvalidShots(0))
        ));
    }
}
