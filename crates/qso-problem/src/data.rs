//! Synthetic correlated data and bootstrap resampling.
//!
//! The experiment runner works on data with a known ground truth: `k_real`
//! informative features, `k_fake` features correlated with the response but
//! carrying no signal of their own, and `k_redundant` linear images of the
//! real block.  Columns are laid out `[real | fake | redundant]`.

use ndarray::{concatenate, Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::StandardNormal;
use tracing::debug;

use qso_core::{check_ndarray, CoreError, CoreResult, PrngKey};

use crate::error::{ProblemError, ProblemResult};

/// Generate linearly correlated feature/response data.
///
/// - real features: iid standard normal, shape (samples, k_real);
/// - response: `X_real · response_vector + gamma · ε`;
/// - fake feature j: `β_j · z + sqrt(1 − β_j²) · ε` against the
///   standardized response z (empty `betas` means β = 0 throughout);
/// - redundant features: `X_real · redundant_matrixᵀ + gamma · ε`.
///
/// Deterministic given `key`.
#[allow(clippy::too_many_arguments)]
pub fn random_linearly_correlated_data(
    samples: usize,
    k_real: usize,
    k_fake: usize,
    k_redundant: usize,
    betas: &[f64],
    gamma: f64,
    response_vector: ArrayView1<'_, f64>,
    redundant_matrix: ArrayView2<'_, f64>,
    key: PrngKey,
) -> ProblemResult<(Array2<f64>, Array1<f64>)> {
    check_ndarray("response_vector", &response_vector, &[k_real])?;
    check_ndarray("redundant_matrix", &redundant_matrix, &[k_redundant, k_real])?;
    if !betas.is_empty() && betas.len() != k_fake {
        return Err(ProblemError::BetasLength {
            expected: k_fake,
            actual: betas.len(),
        });
    }

    let (real_key, response_key, fake_key, redundant_key) = key.split4();
    debug!(samples, k_real, k_fake, k_redundant, "generating synthetic data");

    let real = standard_normal(samples, k_real, real_key);

    let mut response = real.dot(&response_vector);
    {
        let mut rng = response_key.rng();
        for r in response.iter_mut() {
            let eps: f64 = rng.sample(StandardNormal);
            *r += gamma * eps;
        }
    }

    let z = standardize(response.view());
    let mut fake = standard_normal(samples, k_fake, fake_key);
    for (j, mut col) in fake.columns_mut().into_iter().enumerate() {
        let beta = betas.get(j).copied().unwrap_or(0.0);
        let noise_scale = (1.0 - beta * beta).max(0.0).sqrt();
        for (f, &zi) in col.iter_mut().zip(z.iter()) {
            *f = beta * zi + noise_scale * *f;
        }
    }

    let mut redundant = real.dot(&redundant_matrix.t());
    {
        let mut rng = redundant_key.rng();
        for r in redundant.iter_mut() {
            let eps: f64 = rng.sample(StandardNormal);
            *r += gamma * eps;
        }
    }

    let features = concatenate(Axis(1), &[real.view(), fake.view(), redundant.view()])
        .expect("blocks share the row count by construction");
    Ok((features, response))
}

/// Bootstrap-resample paired data with replacement.
///
/// Draws `samples` row indices uniformly and returns the selected rows of
/// both arrays in the same order.  Deterministic given `key`.
pub fn resample_data(
    x: ArrayView2<'_, f64>,
    y: ArrayView1<'_, f64>,
    samples: usize,
    key: PrngKey,
) -> CoreResult<(Array2<f64>, Array1<f64>)> {
    let n = x.nrows();
    check_ndarray("y", &y, &[n])?;
    if n == 0 {
        return Err(CoreError::Empty { name: "x".into() });
    }

    let mut rng = key.rng();
    let dist = Uniform::from(0..n);
    let indices: Vec<usize> = (0..samples).map(|_| rng.sample(dist)).collect();

    Ok((x.select(Axis(0), &indices), y.select(Axis(0), &indices)))
}

fn standard_normal(rows: usize, cols: usize, key: PrngKey) -> Array2<f64> {
    let mut rng = key.rng();
    Array2::from_shape_simple_fn((rows, cols), || rng.sample(StandardNormal))
}

/// Center and scale to unit variance; all-zeros if the variance vanishes.
fn standardize(v: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = v.len() as f64;
    if n == 0.0 {
        return Array1::zeros(0);
    }
    let mean = v.sum() / n;
    let var = v.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n;
    let std = var.sqrt();
    if std == 0.0 {
        Array1::zeros(v.len())
    } else {
        v.mapv(|x| (x - mean) / std)
    }
}
