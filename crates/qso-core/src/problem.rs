//! The seam between problem definitions and optimization drivers.

use crate::error::CoreResult;
use crate::hamiltonian::Hamiltonian;

/// A stochastic optimization problem that yields Hamiltonians on demand.
///
/// Each call to [`sample_hamiltonian`](QsoProblem::sample_hamiltonian) may
/// advance the problem's internal pseudo-random state, so successive calls
/// return distinct but reproducible Hamiltonians.  Implementations are not
/// safe for concurrent calls; drivers must serialize access.
pub trait QsoProblem {
    /// Number of binary decision variables (qubits) in the problem.
    fn n_var(&self) -> usize;

    /// Draw the next Hamiltonian realisation of the objective.
    fn sample_hamiltonian(&mut self) -> CoreResult<Hamiltonian>;
}
