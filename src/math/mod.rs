//! Mathematical utilities: quadratic least squares and correlation.

pub mod polyfit;
pub mod stats;

pub use polyfit::*;
pub use stats::*;
