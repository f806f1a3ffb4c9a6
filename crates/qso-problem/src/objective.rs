//! Correlation-based objective matrix.
//!
//! The feature-selection objective balances two correlation terms weighted
//! by `alpha`:
//!
//! - redundancy: `|corr(feature_i, feature_j)| · (1 − alpha)` everywhere,
//! - importance: `alpha · |corr(feature_i, response)|` subtracted from the
//!   diagonal.
//!
//! Minimizing the induced QUBO then prefers features that track the
//! response while penalizing mutually redundant ones.

use ndarray::{Array2, ArrayView1, ArrayView2};

use qso_core::{check_ndarray, CoreResult};

/// Build the k×k objective matrix from paired samples.
///
/// `feature_data` has shape (N, k), `response_data` shape (N,).  Pure and
/// deterministic; fails fast on a length mismatch.  Zero-variance columns
/// contribute a correlation of 0 rather than NaN.
pub fn objective_matrix(
    feature_data: ArrayView2<'_, f64>,
    response_data: ArrayView1<'_, f64>,
    alpha: f64,
) -> CoreResult<Array2<f64>> {
    let n = feature_data.nrows();
    let k = feature_data.ncols();
    check_ndarray("response_data", &response_data, &[n])?;

    let mut objective = Array2::<f64>::zeros((k, k));
    for i in 0..k {
        for j in 0..k {
            let corr = pearson(feature_data.column(i), feature_data.column(j));
            objective[[i, j]] = corr.abs() * (1.0 - alpha);
        }
    }
    for i in 0..k {
        let importance = pearson(feature_data.column(i), response_data).abs();
        objective[[i, i]] -= alpha * importance;
    }

    Ok(objective)
}

/// Pearson correlation of two equal-length samples.
///
/// Returns 0 when either sample has zero variance.
fn pearson(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let n = a.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_a = a.sum() / n;
    let mean_b = b.sum() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let da = x - mean_a;
        let db = y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 {
        0.0
    } else {
        cov / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn pearson_perfect_correlation() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![2.0, 4.0, 6.0];
        assert!((pearson(a.view(), b.view()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_anticorrelation() {
        let a = array![1.0, 2.0, 3.0];
        let b = array![3.0, 2.0, 1.0];
        assert!((pearson(a.view(), b.view()) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_zero_variance_is_zero() {
        let a = array![1.0, 1.0, 1.0];
        let b = array![3.0, 2.0, 1.0];
        assert_eq!(pearson(a.view(), b.view()), 0.0);
    }
}
