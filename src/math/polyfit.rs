//! Quadratic least-squares fit of one intensity sequence on another.
//!
//! The scoring step regresses the measured intensities on the theoretical
//! ones, `measured ≈ c0 + c1 x + c2 x²` with `x = theoretical`, and reports
//! the mean squared error of the fitted values.
//!
//! Implementation choices:
//! - The design matrix is a plain degree-2 Vandermonde matrix.
//! - We solve with SVD so the fit stays robust when the columns are nearly
//!   collinear (theoretical curves over a handful of mixing times can be
//!   close to linear, or even constant).

use nalgebra::{DMatrix, DVector};

use crate::domain::NumericFailure;

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(coeffs) = svd.solve(y, tol) {
            if coeffs.iter().all(|v| v.is_finite()) {
                return Some(coeffs);
            }
        }
    }

    None
}

/// Mean squared error of a degree-2 polynomial fit of `measured` on
/// `theoretical`.
///
/// Both slices must have the same non-zero length; `fit_statistics` checks
/// that before calling in here. A failed or non-finite solve is reported as
/// `SingularFit`.
pub fn quadratic_fit_mse(theoretical: &[f64], measured: &[f64]) -> Result<f64, NumericFailure> {
    let n = theoretical.len();

    let mut design = DMatrix::<f64>::zeros(n, 3);
    for (i, &x) in theoretical.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = x;
        design[(i, 2)] = x * x;
    }
    let targets = DVector::from_column_slice(measured);

    let coeffs = solve_least_squares(&design, &targets).ok_or(NumericFailure::SingularFit)?;

    let mut sum = 0.0;
    for (i, &x) in theoretical.iter().enumerate() {
        let fitted = coeffs[0] + coeffs[1] * x + coeffs[2] * x * x;
        let diff = fitted - measured[i];
        sum += diff * diff;
    }

    let mse = sum / n as f64;
    if mse.is_finite() {
        Ok(mse)
    } else {
        Err(NumericFailure::SingularFit)
    }
}
