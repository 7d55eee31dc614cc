//! Sequential sweep orchestration.
//!
//! Drives the grid enumerator through the validity filter, model
//! evaluation, and fit scoring, honoring the always-log contract:
//! every candidate that passes the filter is written to the result
//! log whether it fitted or failed.

use crate::domain::{Candidate, Evaluation, MeasuredCurve, SweepConfig, SweepStats};
use crate::error::AppError;
use crate::fit::grid;
use crate::io::ResultLog;
use crate::math::{GofError, fit_statistics};
use crate::models;

/// Evaluate one candidate against the measured curve.
///
/// Numeric failures (degenerate parameters, overflowing exponentials,
/// unscorable fits) are data, not errors: they come back as
/// `Evaluation::Failed` so the caller can log and tally them. Only a
/// broken internal contract (curve length mismatch) aborts the run.
pub fn evaluate_candidate(
    candidate: &Candidate,
    measured: &MeasuredCurve,
) -> Result<Evaluation, AppError> {
    let curve = match models::theoretical_curve(candidate, measured.mixing_times()) {
        Ok(curve) => curve,
        Err(reason) => return Ok(Evaluation::Failed(reason)),
    };

    match fit_statistics(measured.intensities(), &curve.intensities) {
        Ok(stats) => Ok(Evaluation::Fitted { curve, stats }),
        Err(GofError::Numeric(reason)) => Ok(Evaluation::Failed(reason)),
        Err(GofError::LengthMismatch {
            measured: m,
            theoretical: t,
        }) => Err(AppError::contract(format!(
            "Curve length mismatch: {m} measured vs {t} theoretical points."
        ))),
    }
}

/// Walk the whole grid sequentially, recording every evaluated
/// candidate in the log and returning the tallies.
///
/// Candidates rejected by the validity filter are counted but never
/// evaluated or logged. The log is flushed before returning.
pub fn run_sweep(
    config: &SweepConfig,
    measured: &MeasuredCurve,
    log: &mut ResultLog,
) -> Result<SweepStats, AppError> {
    let mut stats = SweepStats::default();

    for candidate in grid::candidates(config) {
        stats.generated += 1;
        if !models::is_valid(&candidate) {
            stats.filtered += 1;
            continue;
        }

        let evaluation = evaluate_candidate(&candidate, measured)?;
        log.record(&candidate, &evaluation)?;
        match evaluation {
            Evaluation::Fitted { .. } => stats.fitted += 1,
            Evaluation::Failed(reason) => stats.record_failure(reason),
        }
    }

    log.flush()?;
    Ok(stats)
}
