//! NOE intensity model evaluation.
//!
//! Both variants share the same two-exponential skeleton for transient NOE
//! buildup in a two-spin system (Keeler's treatment of longer mixing times):
//!
//! ```text
//! Iz/Iz0 = 1 + A (e2 - e1)
//! Sz/Iz0 = 1 - e1 + e2 + B (e1 - e2)
//! e1 = exp(-λ1 t),  e2 = exp(-λ2 t)
//! intensity = Iz/Iz0 - Sz/Iz0
//! ```
//!
//! The variants differ only in how the amplitude terms `A` and `B` are
//! derived:
//!
//! - full: `A = 2σ/r`, `B = (r_i - r_s)/r` from the explicit rates
//! - reduced: both follow from `λ1, λ2, r_i` alone, via a discriminant that
//!   goes negative for rate combinations no two-spin system can produce

use crate::domain::{Candidate, NumericFailure, TheoreticalCurve};

/// Grid-level validity filter applied before any evaluation.
///
/// Rejected candidates are skipped silently (not logged):
/// - `λ2 >= λ1` (the slow rate must stay below the fast one)
/// - `λ1 == 0`, `λ2 == 0` or `r_i == 0`
///
/// The full model's `r_s`, `r` and `σ` are deliberately left unchecked; a
/// full-model candidate with `r == 0` survives the filter and fails during
/// evaluation instead.
pub fn is_valid(candidate: &Candidate) -> bool {
    let lambda_one = candidate.lambda_one();
    let lambda_two = candidate.lambda_two();
    if lambda_two >= lambda_one {
        return false;
    }
    lambda_one != 0.0 && lambda_two != 0.0 && candidate.r_i() != 0.0
}

/// Evaluate the model intensity at a single mixing time.
pub fn intensity(candidate: &Candidate, mixing_time: f64) -> Result<f64, NumericFailure> {
    let (a, b) = amplitude_terms(candidate)?;

    let e1 = (-candidate.lambda_one() * mixing_time).exp();
    let e2 = (-candidate.lambda_two() * mixing_time).exp();

    let iz_over_iz0 = 1.0 + a * (e2 - e1);
    let sz_over_iz0 = 1.0 - e1 + e2 + b * (e1 - e2);

    let value = iz_over_iz0 - sz_over_iz0;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericFailure::NonFiniteIntensity)
    }
}

/// Evaluate the model over an ordered set of mixing times.
///
/// Order is preserved, and equal mixing times get equal intensities. A
/// failure at any point fails the whole curve; no partial curves are
/// produced.
pub fn theoretical_curve(
    candidate: &Candidate,
    mixing_times: &[f64],
) -> Result<TheoreticalCurve, NumericFailure> {
    let mut intensities = Vec::with_capacity(mixing_times.len());
    for &mixing_time in mixing_times {
        intensities.push(intensity(candidate, mixing_time)?);
    }
    Ok(TheoreticalCurve {
        mixing_times: mixing_times.to_vec(),
        intensities,
    })
}

/// Derive the amplitude terms `A` and `B` for a candidate.
fn amplitude_terms(candidate: &Candidate) -> Result<(f64, f64), NumericFailure> {
    match *candidate {
        Candidate::Full {
            r_i, r_s, r, sigma, ..
        } => {
            if r == 0.0 {
                return Err(NumericFailure::ZeroRelaxationRate);
            }
            Ok((2.0 * sigma / r, (r_i - r_s) / r))
        }
        Candidate::Reduced {
            lambda_one,
            lambda_two,
            r_i,
        } => {
            if lambda_one == lambda_two {
                return Err(NumericFailure::EqualDecayRates);
            }
            let gap = lambda_one - lambda_two;
            let offset = 2.0 * r_i - lambda_one - lambda_two;
            let discriminant = gap * gap - offset * offset;
            if discriminant < 0.0 {
                return Err(NumericFailure::NegativeDiscriminant);
            }
            Ok((2.0 * discriminant.sqrt() / gap, offset / gap))
        }
    }
}
