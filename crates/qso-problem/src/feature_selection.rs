//! The feature-selection problem.

use ndarray::{Array1, Array2};
use tracing::debug;

use qso_core::{check_ndarray, CoreError, CoreResult, Hamiltonian, PrngKey, QsoProblem};

use crate::data::resample_data;
use crate::objective::objective_matrix;
use crate::qubo::qubo_hamiltonian;

/// A feature-selection QUBO problem over fixed sample data.
///
/// Holds the (N, k) feature matrix, the (N,) response vector, the
/// redundancy/importance weight `alpha`, and the current pseudo-random key.
/// Each [`sample_hamiltonian`](QsoProblem::sample_hamiltonian) call splits
/// the key, bootstraps the data with the used half, and re-derives the
/// QUBO Hamiltonian, so successive calls are distinct but the whole
/// sequence replays exactly from the initial key.
pub struct FeatureSelectionProblem {
    feature_data: Array2<f64>,
    response_data: Array1<f64>,
    alpha: f64,
    key: PrngKey,
    n: usize,
    k: usize,
}

impl FeatureSelectionProblem {
    /// Create a problem instance.
    ///
    /// `feature_data` must be (N, k) with N ≥ 1 and `response_data` (N,);
    /// a length mismatch or empty dataset fails fast.
    pub fn new(
        feature_data: Array2<f64>,
        response_data: Array1<f64>,
        alpha: f64,
        key: PrngKey,
    ) -> CoreResult<Self> {
        let (n, k) = feature_data.dim();
        check_ndarray("response_data", &response_data, &[n])?;
        // Bootstrap resampling needs at least one row to draw from.
        if n == 0 {
            return Err(CoreError::Empty {
                name: "feature_data".into(),
            });
        }

        Ok(Self {
            feature_data,
            response_data,
            alpha,
            key,
            n,
            k,
        })
    }

    /// Number of samples N.
    pub fn n_samples(&self) -> usize {
        self.n
    }

    /// The redundancy/importance weight.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl QsoProblem for FeatureSelectionProblem {
    fn n_var(&self) -> usize {
        self.k
    }

    fn sample_hamiltonian(&mut self) -> CoreResult<Hamiltonian> {
        let (kept, used) = self.key.split();
        self.key = kept;

        let (features, response) = resample_data(
            self.feature_data.view(),
            self.response_data.view(),
            self.n,
            used,
        )?;
        let objective = objective_matrix(features.view(), response.view(), self.alpha)?;
        debug!(k = self.k, "sampled objective matrix");
        qubo_hamiltonian(objective.view())
    }
}
