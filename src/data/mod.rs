//! Built-in measured dataset.
//!
//! The reference NOE buildup curve the sweep scores every candidate
//! against: nine (mixing time, intensity) pairs, times in seconds,
//! intensities normalized to the equilibrium magnetization.

use crate::domain::MeasuredCurve;
use crate::error::AppError;

/// Reference buildup measurements, ordered by mixing time.
pub const REFERENCE_MEASUREMENTS: [(f64, f64); 9] = [
    (0.03, 0.019),
    (0.04, 0.026),
    (0.05, 0.036),
    (0.06, 0.043),
    (0.07, 0.051),
    (0.08, 0.057),
    (0.09, 0.064),
    (0.11, 0.076),
    (0.2, 0.085),
];

/// Validated `MeasuredCurve` over the built-in measurements.
pub fn reference_curve() -> Result<MeasuredCurve, AppError> {
    MeasuredCurve::from_pairs(&REFERENCE_MEASUREMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_curve_is_valid() {
        let curve = reference_curve().unwrap();
        assert_eq!(curve.len(), 9);
        assert!((curve.mixing_times()[0] - 0.03).abs() < 1e-12);
        assert!((curve.intensities()[8] - 0.085).abs() < 1e-12);
    }
}
