//! Array shape contract checks.
//!
//! Every module boundary that accepts an `ndarray` value validates it here
//! and fails fast with a descriptive error naming the offending array.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{CoreError, CoreResult};

/// Check that `array` has exactly the shape `expected`.
pub fn check_ndarray<S, D>(name: &str, array: &ArrayBase<S, D>, expected: &[usize]) -> CoreResult<()>
where
    S: Data,
    D: Dimension,
{
    if array.shape() != expected {
        return Err(CoreError::ShapeMismatch {
            name: name.to_owned(),
            expected: expected.to_vec(),
            actual: array.shape().to_vec(),
        });
    }
    Ok(())
}

/// Check that `array` has exactly `expected` dimensions.
pub fn check_ndim<S, D>(name: &str, array: &ArrayBase<S, D>, expected: usize) -> CoreResult<()>
where
    S: Data,
    D: Dimension,
{
    if array.ndim() != expected {
        return Err(CoreError::NdimMismatch {
            name: name.to_owned(),
            expected,
            actual: array.ndim(),
        });
    }
    Ok(())
}
