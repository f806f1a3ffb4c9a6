//! Objective matrix → Ising Hamiltonian mapping.
//!
//! The QUBO objective xᵀQx over binary variables maps onto spin variables
//! via x = (1 − z)/2, giving linear coefficients `h_m = −colsum(Q)_m / 2`
//! and quadratic coefficients `j_mn = Q_mn / 4`.  Coefficient formulas are
//! fixed; both orderings of every off-diagonal pair are emitted and then
//! merged by `simplify`.

use ndarray::{ArrayView2, Axis};

use qso_core::{check_ndarray, CoreResult, Hamiltonian, HamiltonianTerm};

/// Map a square objective matrix onto a weighted sum of Z and ZZ terms.
///
/// Fails with a shape error if `objective` is not (n, n).  The result is
/// simplified: n linear terms and, generically, n(n−1)/2 quadratic terms.
pub fn qubo_hamiltonian(objective: ArrayView2<'_, f64>) -> CoreResult<Hamiltonian> {
    let n = objective.nrows();
    check_ndarray("objective", &objective, &[n, n])?;

    let j = objective.mapv(|v| v / 4.0);
    let h = objective.sum_axis(Axis(0)).mapv(|v| -v / 2.0);

    let mut terms = Vec::with_capacity(n * n);
    for m in 0..n {
        for p in 0..n {
            if m != p {
                terms.push(HamiltonianTerm::zz(m as u32, p as u32, j[[m, p]]));
            } else {
                terms.push(HamiltonianTerm::z(m as u32, h[m]));
            }
        }
    }

    Ok(Hamiltonian::from_terms(terms).simplify())
}
