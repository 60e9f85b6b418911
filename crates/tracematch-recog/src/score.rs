//! Inner-product similarity scoring
//!
//! The similarity between two intensity vectors is their raw inner product
//! `Σ a[i]·b[i]`. For two images flattened row-major this equals
//! `tr(Aᵗ·B)`, the trace of the matrix product of the images viewed as
//! matrices, so it can be computed in a single linear pass instead of an
//! actual matrix multiplication.
//!
//! The score is intentionally unnormalized: there is no mean subtraction
//! and no magnitude scaling, so absolute pixel brightness and image area
//! bias the score. That is a known property of the method, not something
//! this module corrects for.

use tracematch_core::IntensityVector;

use crate::error::{RecogError, RecogResult};

/// Compute the inner product of two equal-length intensity vectors
///
/// Elements are multiplied pairwise and accumulated in `f64`.
///
/// # Errors
///
/// Returns [`RecogError::DimensionMismatch`] if the vectors differ in
/// length. Positional correspondence between elements is only meaningful
/// for vectors of the same layout, so mismatched operands are rejected
/// rather than truncated.
///
/// # Examples
///
/// ```
/// use tracematch_core::IntensityVector;
/// use tracematch_recog::inner_product;
///
/// let a = IntensityVector::from_slice(&[1.0, 2.0, 3.0]);
/// let b = IntensityVector::from_slice(&[4.0, 5.0, 6.0]);
/// assert_eq!(inner_product(&a, &b).unwrap(), 32.0);
/// ```
pub fn inner_product(a: &IntensityVector, b: &IntensityVector) -> RecogResult<f64> {
    if a.len() != b.len() {
        return Err(RecogError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let sum = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(&x, &y)| x as f64 * y as f64)
        .sum();

    Ok(sum)
}
