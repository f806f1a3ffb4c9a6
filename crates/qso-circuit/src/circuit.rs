//! Gate-list circuit representation.
//!
//! The harness only ever executes circuits front to back on a simulator, so
//! the representation is a flat instruction list with bounds checking on
//! append.  Builder methods mirror the usual gate vocabulary and return
//! `CircuitResult<()>` so construction errors surface at the offending gate.

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};

/// A single gate instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard.
    H(u32),
    /// Pauli-X.
    X(u32),
    /// Phase gate S (√Z).
    S(u32),
    /// Inverse phase gate S†.
    Sdg(u32),
    /// Rotation about X by `theta`.
    Rx {
        /// Rotation angle.
        theta: f64,
        /// Target qubit.
        qubit: u32,
    },
    /// Rotation about Z by `theta`.
    Rz {
        /// Rotation angle.
        theta: f64,
        /// Target qubit.
        qubit: u32,
    },
    /// Controlled-NOT.
    Cx {
        /// Control qubit.
        control: u32,
        /// Target qubit.
        target: u32,
    },
}

/// A fixed-width quantum circuit as an ordered gate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    name: String,
    n_qubits: u32,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit of the given width.
    pub fn with_size(name: impl Into<String>, n_qubits: u32) -> Self {
        Self {
            name: name.into(),
            n_qubits,
            gates: Vec::new(),
        }
    }

    /// The circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Circuit width in qubits.
    pub fn num_qubits(&self) -> u32 {
        self.n_qubits
    }

    /// The ordered gate list.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total gate count.
    pub fn depth(&self) -> usize {
        self.gates.len()
    }

    /// Append a Hadamard on `qubit`.
    pub fn h(&mut self, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::H(qubit));
        Ok(())
    }

    /// Append a Pauli-X on `qubit`.
    pub fn x(&mut self, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::X(qubit));
        Ok(())
    }

    /// Append an S gate on `qubit`.
    pub fn s(&mut self, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::S(qubit));
        Ok(())
    }

    /// Append an S† gate on `qubit`.
    pub fn sdg(&mut self, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::Sdg(qubit));
        Ok(())
    }

    /// Append an X rotation by `theta` on `qubit`.
    pub fn rx(&mut self, theta: f64, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::Rx { theta, qubit });
        Ok(())
    }

    /// Append a Z rotation by `theta` on `qubit`.
    pub fn rz(&mut self, theta: f64, qubit: u32) -> CircuitResult<()> {
        self.check(qubit)?;
        self.gates.push(Gate::Rz { theta, qubit });
        Ok(())
    }

    /// Append a CNOT with the given control and target.
    pub fn cx(&mut self, control: u32, target: u32) -> CircuitResult<()> {
        self.check(control)?;
        self.check(target)?;
        if control == target {
            return Err(CircuitError::DuplicateQubit(control));
        }
        self.gates.push(Gate::Cx { control, target });
        Ok(())
    }

    fn check(&self, qubit: u32) -> CircuitResult<()> {
        if qubit >= self.n_qubits {
            return Err(CircuitError::QubitOutOfRange {
                qubit,
                n_qubits: self.n_qubits,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_in_order() {
        let mut c = Circuit::with_size("t", 2);
        c.h(0).unwrap();
        c.cx(0, 1).unwrap();
        c.rz(0.5, 1).unwrap();
        assert_eq!(c.depth(), 3);
        assert_eq!(c.gates()[0], Gate::H(0));
        assert_eq!(
            c.gates()[2],
            Gate::Rz {
                theta: 0.5,
                qubit: 1
            }
        );
    }

    #[test]
    fn out_of_range_qubit_rejected() {
        let mut c = Circuit::with_size("t", 2);
        assert!(matches!(
            c.h(2),
            Err(CircuitError::QubitOutOfRange { qubit: 2, .. })
        ));
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn cx_rejects_duplicate_qubit() {
        let mut c = Circuit::with_size("t", 2);
        assert!(matches!(c.cx(1, 1), Err(CircuitError::DuplicateQubit(1))));
    }
}
