//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - used in-memory while walking the parameter grid
//! - reconstructed from the flat value tuples the enumerator produces
//! - rendered into the result log without further conversion

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::AppError;

/// Which NOE model variant to sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Six-parameter variant with explicit relaxation and cross-relaxation
    /// rates (`λ1, λ2, r_i, r_s, r, σ`).
    Full,
    /// Three-parameter variant (`λ1, λ2, r_i`) that derives its amplitude
    /// terms from the decay rates alone.
    Reduced,
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Full => "full (6-parameter)",
            ModelKind::Reduced => "reduced (3-parameter)",
        }
    }

    /// Number of swept parameters for this variant.
    pub fn param_count(self) -> usize {
        match self {
            ModelKind::Full => 6,
            ModelKind::Reduced => 3,
        }
    }
}

/// A single point in the parameter grid.
///
/// Field order matches the sweep precedence and the result log's column
/// order: `λ1, λ2, r_i, r_s, r, σ` for the full model, `λ1, λ2, r_i` for the
/// reduced one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate {
    Full {
        lambda_one: f64,
        lambda_two: f64,
        r_i: f64,
        r_s: f64,
        r: f64,
        sigma: f64,
    },
    Reduced {
        lambda_one: f64,
        lambda_two: f64,
        r_i: f64,
    },
}

impl Candidate {
    /// Build a candidate from a flat value tuple in sweep precedence order.
    ///
    /// # Panics
    /// Panics if `values` does not have length `model.param_count()`. The
    /// enumerator always produces correctly sized tuples.
    pub fn from_values(model: ModelKind, values: &[f64]) -> Self {
        assert_eq!(values.len(), model.param_count());
        match model {
            ModelKind::Full => Candidate::Full {
                lambda_one: values[0],
                lambda_two: values[1],
                r_i: values[2],
                r_s: values[3],
                r: values[4],
                sigma: values[5],
            },
            ModelKind::Reduced => Candidate::Reduced {
                lambda_one: values[0],
                lambda_two: values[1],
                r_i: values[2],
            },
        }
    }

    /// Fast decay rate, shared by both variants.
    pub fn lambda_one(&self) -> f64 {
        match *self {
            Candidate::Full { lambda_one, .. } | Candidate::Reduced { lambda_one, .. } => lambda_one,
        }
    }

    /// Slow decay rate, shared by both variants.
    pub fn lambda_two(&self) -> f64 {
        match *self {
            Candidate::Full { lambda_two, .. } | Candidate::Reduced { lambda_two, .. } => lambda_two,
        }
    }

    /// Self-relaxation rate of the I spin, shared by both variants.
    pub fn r_i(&self) -> f64 {
        match *self {
            Candidate::Full { r_i, .. } | Candidate::Reduced { r_i, .. } => r_i,
        }
    }

    /// Flat values in sweep precedence order (the log's column order).
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Candidate::Full {
                lambda_one,
                lambda_two,
                r_i,
                r_s,
                r,
                sigma,
            } => vec![lambda_one, lambda_two, r_i, r_s, r, sigma],
            Candidate::Reduced {
                lambda_one,
                lambda_two,
                r_i,
            } => vec![lambda_one, lambda_two, r_i],
        }
    }
}

/// Measured NOE intensities keyed by mixing time, in acquisition order.
///
/// Construction validates the data once so every later stage can assume
/// parallel sequences of finite values over positive mixing times.
/// Duplicate mixing times are allowed.
#[derive(Debug, Clone)]
pub struct MeasuredCurve {
    mixing_times: Vec<f64>,
    intensities: Vec<f64>,
}

impl MeasuredCurve {
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self, AppError> {
        if pairs.is_empty() {
            return Err(AppError::no_data("No measured NOE intensities to fit."));
        }
        for &(time, intensity) in pairs {
            if !(time.is_finite() && time > 0.0) {
                return Err(AppError::config(format!(
                    "Invalid mixing time {time}: must be finite and > 0."
                )));
            }
            if !intensity.is_finite() {
                return Err(AppError::config(format!(
                    "Non-finite measured intensity at mixing time {time}."
                )));
            }
        }
        Ok(Self {
            mixing_times: pairs.iter().map(|&(t, _)| t).collect(),
            intensities: pairs.iter().map(|&(_, i)| i).collect(),
        })
    }

    pub fn mixing_times(&self) -> &[f64] {
        &self.mixing_times
    }

    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    pub fn len(&self) -> usize {
        self.mixing_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mixing_times.is_empty()
    }
}

/// A model-predicted curve over a set of mixing times.
#[derive(Debug, Clone, PartialEq)]
pub struct TheoreticalCurve {
    pub mixing_times: Vec<f64>,
    pub intensities: Vec<f64>,
}

/// Goodness-of-fit statistics for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitStats {
    pub mean_squared_error: f64,
    pub r_squared: f64,
}

/// Why a candidate produced no statistics.
///
/// These are per-candidate outcomes recovered by the sweep loop and logged
/// with unset statistics; they never abort a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NumericFailure {
    /// Reduced model with `λ1 == λ2` (amplitude terms divide by `λ1 - λ2`).
    EqualDecayRates,
    /// Full model with `r == 0` (amplitude terms divide by `r`).
    ZeroRelaxationRate,
    /// Reduced model whose amplitude discriminant went negative.
    NegativeDiscriminant,
    /// The model produced a NaN or infinite intensity.
    NonFiniteIntensity,
    /// The quadratic least-squares fit had no finite solution.
    SingularFit,
    /// Pearson correlation undefined (a zero-variance sequence).
    ZeroVariance,
}

impl NumericFailure {
    /// Short label for the run summary's failure breakdown.
    pub fn label(self) -> &'static str {
        match self {
            NumericFailure::EqualDecayRates => "equal decay rates",
            NumericFailure::ZeroRelaxationRate => "zero relaxation rate",
            NumericFailure::NegativeDiscriminant => "negative discriminant",
            NumericFailure::NonFiniteIntensity => "non-finite intensity",
            NumericFailure::SingularFit => "singular quadratic fit",
            NumericFailure::ZeroVariance => "zero variance",
        }
    }
}

/// Outcome of evaluating one non-filtered candidate.
///
/// The sweep logs the candidate either way; a failure carries its reason so
/// the tallies record why the statistics are unset.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Fitted {
        curve: TheoreticalCurve,
        stats: FitStats,
    },
    Failed(NumericFailure),
}

/// A half-open sweep interval `[min, max)` discretized with a fixed step.
///
/// Counting follows the `ceil((max - min) / step)` convention: `[5.0, 12.0)`
/// at step `0.1` yields 70 values, and the upper bound is never included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    min: f64,
    max: f64,
    step: f64,
}

impl ParamRange {
    pub fn new(name: &str, min: f64, max: f64, step: f64) -> Result<Self, AppError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite() && step > 0.0 && max > min) {
            return Err(AppError::config(format!(
                "Invalid {name} range: min={min}, max={max}, step={step} \
                 (must be finite, step>0, and max>min)."
            )));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of grid values in `[min, max)`.
    pub fn len(&self) -> usize {
        ((self.max - self.min) / self.step).ceil() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The grid values `min + i * step`, in ascending order.
    ///
    /// The iterator is `Clone` so it can participate in a cartesian product.
    pub fn values(self) -> impl Iterator<Item = f64> + Clone {
        let Self { min, step, .. } = self;
        (0..self.len()).map(move |i| min + i as f64 * step)
    }
}

/// Everything a sweep needs, assembled by the CLI layer.
///
/// Ranges are validated at construction, so a config in hand is always
/// enumerable.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub model: ModelKind,
    pub log_path: PathBuf,

    pub lambda_one: ParamRange,
    pub lambda_two: ParamRange,
    pub r_i: ParamRange,
    pub r_s: ParamRange,
    pub r: ParamRange,
    pub sigma: ParamRange,
}

impl SweepConfig {
    /// Ranges actually swept for the configured model, in precedence order
    /// (`λ1` outermost, the last range fastest-varying).
    pub fn active_ranges(&self) -> Vec<ParamRange> {
        match self.model {
            ModelKind::Full => vec![
                self.lambda_one,
                self.lambda_two,
                self.r_i,
                self.r_s,
                self.r,
                self.sigma,
            ],
            ModelKind::Reduced => vec![self.lambda_one, self.lambda_two, self.r_i],
        }
    }

    /// Total number of grid points before validity filtering.
    pub fn candidate_count(&self) -> u64 {
        self.active_ranges()
            .iter()
            .map(|range| range.len() as u64)
            .product()
    }
}

/// Running tallies for one sweep.
///
/// `generated == filtered + fitted + failed` holds at every step, and
/// `fitted + failed` equals the number of log lines written.
#[derive(Debug, Clone, Default)]
pub struct SweepStats {
    pub generated: u64,
    pub filtered: u64,
    pub fitted: u64,
    pub failed: u64,
    /// Per-reason breakdown of `failed`.
    pub failures: BTreeMap<NumericFailure, u64>,
}

impl SweepStats {
    pub fn record_failure(&mut self, reason: NumericFailure) {
        self.failed += 1;
        *self.failures.entry(reason).or_insert(0) += 1;
    }

    /// Number of log lines written (fitted plus failed candidates).
    pub fn logged(&self) -> u64 {
        self.fitted + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_range_counts_match_arange_convention() {
        let lambda_one = ParamRange::new("lambda_one", 5.0, 12.0, 0.1).unwrap();
        assert_eq!(lambda_one.len(), 70);

        let values: Vec<f64> = lambda_one.values().collect();
        assert_eq!(values.len(), 70);
        assert!((values[0] - 5.0).abs() < 1e-12);
        assert!((values[69] - 11.9).abs() < 1e-9);
        // The upper bound is excluded.
        assert!(values[69] < 12.0);

        let lambda_two = ParamRange::new("lambda_two", 2.5, 6.0, 0.1).unwrap();
        assert_eq!(lambda_two.len(), 35);

        let unit = ParamRange::new("unit", 0.0, 1.0, 0.1).unwrap();
        assert_eq!(unit.len(), 10);
    }

    #[test]
    fn param_range_rejects_bad_bounds() {
        assert_eq!(
            ParamRange::new("r", 5.0, 1.0, 0.1).unwrap_err().exit_code(),
            2
        );
        assert_eq!(
            ParamRange::new("r", 1.0, 5.0, 0.0).unwrap_err().exit_code(),
            2
        );
        assert_eq!(
            ParamRange::new("r", f64::NAN, 5.0, 0.1)
                .unwrap_err()
                .exit_code(),
            2
        );
    }

    #[test]
    fn candidate_round_trips_through_values() {
        let full = Candidate::from_values(ModelKind::Full, &[8.0, 4.0, 6.0, 3.0, 2.0, 1.5]);
        assert_eq!(full.values(), vec![8.0, 4.0, 6.0, 3.0, 2.0, 1.5]);
        assert_eq!(full.lambda_one(), 8.0);
        assert_eq!(full.lambda_two(), 4.0);
        assert_eq!(full.r_i(), 6.0);

        let reduced = Candidate::from_values(ModelKind::Reduced, &[8.0, 4.0, 6.0]);
        assert_eq!(reduced.values(), vec![8.0, 4.0, 6.0]);
    }

    #[test]
    fn measured_curve_validates_inputs() {
        assert_eq!(MeasuredCurve::from_pairs(&[]).unwrap_err().exit_code(), 3);
        assert_eq!(
            MeasuredCurve::from_pairs(&[(0.0, 0.5)])
                .unwrap_err()
                .exit_code(),
            2
        );
        assert_eq!(
            MeasuredCurve::from_pairs(&[(0.1, f64::NAN)])
                .unwrap_err()
                .exit_code(),
            2
        );

        // Duplicate mixing times are fine.
        let curve = MeasuredCurve::from_pairs(&[(0.1, 0.5), (0.1, 0.6)]).unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.mixing_times(), &[0.1, 0.1]);
    }

    #[test]
    fn sweep_stats_tallies_failures_per_reason() {
        let mut stats = SweepStats::default();
        stats.fitted += 1;
        stats.record_failure(NumericFailure::NegativeDiscriminant);
        stats.record_failure(NumericFailure::NegativeDiscriminant);
        stats.record_failure(NumericFailure::ZeroVariance);

        assert_eq!(stats.failed, 3);
        assert_eq!(stats.logged(), 4);
        assert_eq!(stats.failures[&NumericFailure::NegativeDiscriminant], 2);
        assert_eq!(stats.failures[&NumericFailure::ZeroVariance], 1);
        assert_eq!(stats.failures.values().sum::<u64>(), stats.failed);
    }

    #[test]
    fn active_ranges_follow_model_arity() {
        let range = |name| ParamRange::new(name, 1.0, 2.0, 0.5).unwrap();
        let mut config = SweepConfig {
            model: ModelKind::Full,
            log_path: PathBuf::from("out.log"),
            lambda_one: range("lambda_one"),
            lambda_two: range("lambda_two"),
            r_i: range("r_i"),
            r_s: range("r_s"),
            r: range("r"),
            sigma: range("sigma"),
        };

        assert_eq!(config.active_ranges().len(), 6);
        assert_eq!(config.candidate_count(), 64);

        config.model = ModelKind::Reduced;
        assert_eq!(config.active_ranges().len(), 3);
        assert_eq!(config.candidate_count(), 8);
    }
}
