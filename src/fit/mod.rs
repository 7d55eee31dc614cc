//! Grid enumeration and sweep execution.
//!
//! Responsibilities:
//!
//! - expand the configured parameter ranges into a lazy candidate
//!   stream (`grid`)
//! - walk that stream sequentially, scoring every candidate and
//!   recording each outcome in the result log (`sweep`)

pub mod grid;
pub mod sweep;

pub use grid::*;
pub use sweep::*;
