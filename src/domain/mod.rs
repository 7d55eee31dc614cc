//! Domain types used throughout the sweep.
//!
//! This module defines:
//!
//! - the model variants (`ModelKind`) and grid points (`Candidate`)
//! - measured and theoretical intensity curves
//! - evaluation outcomes (`FitStats`, `NumericFailure`, `Evaluation`)
//! - sweep configuration and tallies (`SweepConfig`, `SweepStats`)

pub mod types;

pub use types::*;
