//! Input/output helpers.
//!
//! - append-only result log written during the sweep (`log`)

pub mod log;

pub use log::*;
