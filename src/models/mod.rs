//! NOE intensity model implementations.
//!
//! Models are small, pure functions so the sweep and scoring code can stay
//! generic over the two variants.

pub mod noe;

pub use noe::*;
