//! Command-line parsing for the NOE sweep fitter.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! the modeling/math code: `Cli` only describes the flags, and
//! `app::sweep_config_from_args` turns them into a validated `SweepConfig`.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::ModelKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "noe", version, about = "Exhaustive NOE buildup-curve fitter")]
pub struct Cli {
    /// Relaxation model variant to sweep.
    #[arg(long, value_enum, default_value_t = ModelKind::Full)]
    pub model: ModelKind,

    /// Result log path. Appended to, one line per evaluated candidate.
    #[arg(long, default_value = "out.log")]
    pub log: PathBuf,

    /// Grid step shared by all parameter ranges.
    #[arg(long, default_value_t = 0.1)]
    pub step: f64,

    /// Lower bound for the fast decay rate lambda_1 (1/s).
    #[arg(long, default_value_t = 5.0)]
    pub lambda_one_min: f64,

    /// Upper bound (exclusive) for lambda_1 (1/s).
    #[arg(long, default_value_t = 12.0)]
    pub lambda_one_max: f64,

    /// Lower bound for the slow decay rate lambda_2 (1/s).
    #[arg(long, default_value_t = 2.5)]
    pub lambda_two_min: f64,

    /// Upper bound (exclusive) for lambda_2 (1/s).
    #[arg(long, default_value_t = 6.0)]
    pub lambda_two_max: f64,

    /// Lower bound for the I-spin self-relaxation rate r_i (1/s).
    #[arg(long, default_value_t = 3.0)]
    pub r_i_min: f64,

    /// Upper bound (exclusive) for r_i (1/s).
    #[arg(long, default_value_t = 10.0)]
    pub r_i_max: f64,

    /// Lower bound for the S-spin self-relaxation rate r_s (1/s). Full model only.
    #[arg(long, default_value_t = 3.0)]
    pub r_s_min: f64,

    /// Upper bound (exclusive) for r_s (1/s). Full model only.
    #[arg(long, default_value_t = 10.0)]
    pub r_s_max: f64,

    /// Lower bound for the total relaxation rate r (1/s). Full model only.
    #[arg(long, default_value_t = 1.0)]
    pub r_min: f64,

    /// Upper bound (exclusive) for r (1/s). Full model only.
    #[arg(long, default_value_t = 5.0)]
    pub r_max: f64,

    /// Lower bound for the cross-relaxation rate sigma (1/s). Full model only.
    #[arg(long, default_value_t = 1.0)]
    pub sigma_min: f64,

    /// Upper bound (exclusive) for sigma (1/s). Full model only.
    #[arg(long, default_value_t = 5.0)]
    pub sigma_max: f64,
}
