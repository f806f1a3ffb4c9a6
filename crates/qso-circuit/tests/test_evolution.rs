//! Tests for time-evolution synthesis.

use qso_circuit::{append_exp_pauli, append_x_mixer, Circuit, CircuitError, Gate, Statevector, TrotterEvolution};
use qso_core::{Hamiltonian, HamiltonianTerm};

#[test]
fn exp_zz_is_cnot_ladder_rz_cnot() {
    let mut c = Circuit::with_size("t", 2);
    let term = HamiltonianTerm::zz(0, 1, 0.25);
    append_exp_pauli(&mut c, &term, 2.0).unwrap();

    assert_eq!(c.depth(), 3);
    assert_eq!(
        c.gates()[0],
        Gate::Cx {
            control: 0,
            target: 1
        }
    );
    // θ = 2 · coeff · t = 2 · 0.25 · 2.0
    assert_eq!(
        c.gates()[1],
        Gate::Rz {
            theta: 1.0,
            qubit: 1
        }
    );
    assert_eq!(
        c.gates()[2],
        Gate::Cx {
            control: 0,
            target: 1
        }
    );
}

#[test]
fn exp_x_wrapped_in_hadamards() {
    let mut c = Circuit::with_size("t", 1);
    append_exp_pauli(&mut c, &HamiltonianTerm::x(0, 1.0), 0.5).unwrap();
    assert_eq!(c.gates()[0], Gate::H(0));
    assert!(matches!(c.gates()[1], Gate::Rz { theta, qubit: 0 } if (theta - 1.0).abs() < 1e-15));
    assert_eq!(c.gates()[2], Gate::H(0));
}

#[test]
fn identity_term_is_noop() {
    let mut c = Circuit::with_size("t", 1);
    let term = HamiltonianTerm::new(
        3.0,
        qso_core::PauliString::from_ops([] as [(u32, qso_core::PauliOp); 0]),
    );
    append_exp_pauli(&mut c, &term, 1.0).unwrap();
    assert_eq!(c.depth(), 0);
}

#[test]
fn trotter_rejects_empty_hamiltonian() {
    let h = Hamiltonian::from_terms(vec![]);
    let evol = TrotterEvolution::new(&h, 1.0, 5);
    assert!(matches!(
        evol.first_order(),
        Err(CircuitError::EmptyHamiltonian)
    ));
}

#[test]
fn trotter_rejects_zero_steps() {
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
    let evol = TrotterEvolution::new(&h, 1.0, 0);
    assert!(matches!(
        evol.first_order(),
        Err(CircuitError::InvalidSteps(0))
    ));
}

#[test]
fn trotter_step_count_scales_gate_count() {
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::z(0, 1.0),
        HamiltonianTerm::zz(0, 1, 0.5),
    ]);
    let c1 = TrotterEvolution::new(&h, 1.0, 1).first_order().unwrap();
    let c5 = TrotterEvolution::new(&h, 1.0, 5).first_order().unwrap();
    assert_eq!(c5.depth(), 5 * c1.depth());
    assert_eq!(c1.num_qubits(), 2);
}

#[test]
fn single_z_evolution_rotates_plus_state() {
    // exp(-i t Z) on |+⟩ gives ⟨X⟩ = cos(2t).
    let t = 0.37;
    let h = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);

    let mut circuit = Circuit::with_size("evolve", 1);
    circuit.h(0).unwrap();
    TrotterEvolution::new(&h, t, 1)
        .append_first_order(&mut circuit)
        .unwrap();

    let mut state = Statevector::new(1);
    state.run(&circuit).unwrap();

    let x = Hamiltonian::from_terms(vec![HamiltonianTerm::x(0, 1.0)]);
    let got = state.expectation(&x).unwrap();
    assert!((got - (2.0 * t).cos()).abs() < 1e-10, "got {got}");
}

#[test]
fn trotter_exact_for_commuting_terms() {
    // A diagonal Hamiltonian commutes term-wise, so the slice count must
    // not change the prepared state.
    let h = Hamiltonian::from_terms(vec![
        HamiltonianTerm::z(0, -0.8),
        HamiltonianTerm::z(1, 0.3),
        HamiltonianTerm::zz(0, 1, 0.45),
    ]);
    let x0 = Hamiltonian::from_terms(vec![HamiltonianTerm::x(0, 1.0)]);

    let mut observed = Vec::new();
    for n_steps in [1usize, 4] {
        let mut circuit = Circuit::with_size("evolve", 2);
        circuit.h(0).unwrap();
        circuit.h(1).unwrap();
        TrotterEvolution::new(&h, 0.9, n_steps)
            .append_first_order(&mut circuit)
            .unwrap();
        let mut state = Statevector::new(2);
        state.run(&circuit).unwrap();
        observed.push(state.expectation(&x0).unwrap());
    }
    assert!((observed[0] - observed[1]).abs() < 1e-10);
}

#[test]
fn x_mixer_is_rx_on_every_wire() {
    let mut c = Circuit::with_size("mixer", 3);
    append_x_mixer(&mut c, 0.4).unwrap();
    assert_eq!(c.depth(), 3);
    for (q, gate) in c.gates().iter().enumerate() {
        assert!(
            matches!(*gate, Gate::Rx { theta, qubit } if qubit == q as u32 && (theta - 0.8).abs() < 1e-15)
        );
    }
}

#[test]
fn x_mixer_matches_trotterized_mixer() {
    // The mixer terms commute, so exact evolution and a one-step Trotter
    // of B = Σ X_i prepare the same state.
    let b = Hamiltonian::x_mixer(2);
    let z0 = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
    let t = 0.31;

    let mut exact = Circuit::with_size("exact", 2);
    append_x_mixer(&mut exact, t).unwrap();
    let mut s_exact = Statevector::new(2);
    s_exact.run(&exact).unwrap();

    let mut trotter = Circuit::with_size("trotter", 2);
    TrotterEvolution::new(&b, t, 1)
        .append_first_order(&mut trotter)
        .unwrap();
    let mut s_trotter = Statevector::new(2);
    s_trotter.run(&trotter).unwrap();

    let a = s_exact.expectation(&z0).unwrap();
    let c = s_trotter.expectation(&z0).unwrap();
    assert!((a - c).abs() < 1e-10);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mixer_rotates_z_expectation_by_cos(t in -3.0f64..3.0) {
            // exp(-i t X) on |0⟩ gives ⟨Z⟩ = cos(2t).
            let mut c = Circuit::with_size("mixer", 1);
            append_x_mixer(&mut c, t).unwrap();
            let mut state = Statevector::new(1);
            state.run(&c).unwrap();

            let z = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
            let e = state.expectation(&z).unwrap();
            prop_assert!((e - (2.0 * t).cos()).abs() < 1e-9);
        }

        #[test]
        fn diagonal_evolution_preserves_probabilities(
            t in -2.0f64..2.0,
            c0 in -1.0f64..1.0,
            c01 in -1.0f64..1.0,
        ) {
            // Z/ZZ evolutions are diagonal, so basis probabilities of any
            // product state are untouched.
            let h = Hamiltonian::from_terms(vec![
                HamiltonianTerm::z(0, c0),
                HamiltonianTerm::zz(0, 1, c01),
            ]);
            let mut circuit = Circuit::with_size("diag", 2);
            circuit.h(0).unwrap();
            circuit.h(1).unwrap();
            TrotterEvolution::new(&h, t, 3)
                .append_first_order(&mut circuit)
                .unwrap();

            let mut state = Statevector::new(2);
            state.run(&circuit).unwrap();
            let z0 = Hamiltonian::from_terms(vec![HamiltonianTerm::z(0, 1.0)]);
            prop_assert!(state.expectation(&z0).unwrap().abs() < 1e-9);
        }
    }
}
