//! Correlation statistics and the combined goodness-of-fit entry point.

use crate::domain::{FitStats, NumericFailure};
use crate::math::polyfit::quadratic_fit_mse;

/// Errors from the goodness-of-fit computation.
///
/// A length mismatch is an upstream bug (curves are built over the measured
/// mixing times, so the lengths can only diverge if a caller breaks that),
/// while `Numeric` failures are ordinary per-candidate outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GofError {
    LengthMismatch { measured: usize, theoretical: usize },
    Numeric(NumericFailure),
}

/// Squared Pearson correlation between two equal-length sequences.
///
/// Uses the textbook sum formulation:
///
/// ```text
/// r = (n Σxy - Σx Σy) / sqrt((n Σx² - (Σx)²)(n Σy² - (Σy)²))
/// ```
///
/// A non-positive or non-finite radicand means at least one sequence has no
/// variance to correlate, reported as `ZeroVariance`. The result is clamped
/// to at most 1 so floating-point noise cannot push a perfect correlation
/// out of `[0, 1]`.
pub fn pearson_r_squared(xs: &[f64], ys: &[f64]) -> Result<f64, NumericFailure> {
    let n = xs.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;
    for (&x, &y) in xs.iter().zip(ys) {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }

    let radicand = (n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y);
    if !(radicand.is_finite() && radicand > 0.0) {
        return Err(NumericFailure::ZeroVariance);
    }

    let r = (n * sum_xy - sum_x * sum_y) / radicand.sqrt();
    if !r.is_finite() {
        return Err(NumericFailure::ZeroVariance);
    }
    Ok((r * r).min(1.0))
}

/// Compute both goodness-of-fit statistics for a candidate curve.
///
/// The mean squared error comes from a quadratic fit of the measured
/// intensities on the theoretical ones; `r²` is the squared Pearson
/// correlation of the same pairing. The MSE is computed first, so a
/// singular fit is reported as such even when the correlation would also be
/// undefined. Empty sequences are rejected up front as `ZeroVariance`.
pub fn fit_statistics(measured: &[f64], theoretical: &[f64]) -> Result<FitStats, GofError> {
    if measured.len() != theoretical.len() {
        return Err(GofError::LengthMismatch {
            measured: measured.len(),
            theoretical: theoretical.len(),
        });
    }
    // An empty pair has no variance to correlate, and it must not reach the
    // SVD solve, which cannot factor an empty design matrix.
    if measured.is_empty() {
        return Err(GofError::Numeric(NumericFailure::ZeroVariance));
    }

    let mean_squared_error = quadratic_fit_mse(theoretical, measured).map_err(GofError::Numeric)?;
    let r_squared = pearson_r_squared(theoretical, measured).map_err(GofError::Numeric)?;

    Ok(FitStats {
        mean_squared_error,
        r_squared,
    })
}
