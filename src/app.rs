//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - assembles the validated sweep configuration
//! - opens the append-only result log
//! - runs the sequential sweep against the built-in measured curve
//! - prints the run summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::{ParamRange, SweepConfig};
use crate::error::AppError;
use crate::io::ResultLog;

/// Entry point for the `noe` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = sweep_config_from_args(&cli)?;
    let measured = crate::data::reference_curve()?;
    let mut log = ResultLog::open(&config.log_path)?;

    let stats = crate::fit::run_sweep(&config, &measured, &mut log)?;

    println!("{}", crate::report::format_sweep_summary(&config, &stats));
    Ok(())
}

/// Validate the parsed flags into a `SweepConfig`.
pub fn sweep_config_from_args(cli: &Cli) -> Result<SweepConfig, AppError> {
    Ok(SweepConfig {
        model: cli.model,
        log_path: cli.log.clone(),
        lambda_one: ParamRange::new("lambda_1", cli.lambda_one_min, cli.lambda_one_max, cli.step)?,
        lambda_two: ParamRange::new("lambda_2", cli.lambda_two_min, cli.lambda_two_max, cli.step)?,
        r_i: ParamRange::new("r_i", cli.r_i_min, cli.r_i_max, cli.step)?,
        r_s: ParamRange::new("r_s", cli.r_s_min, cli.r_s_max, cli.step)?,
        r: ParamRange::new("r", cli.r_min, cli.r_max, cli.step)?,
        sigma: ParamRange::new("sigma", cli.sigma_min, cli.sigma_max, cli.step)?,
    })
}
