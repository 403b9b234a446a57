//! vc-core: stable foundation for the volume-correction workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + half-up rounding)
//! - units (calibration unit aliases and reference constants)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{VcError, VcResult};
pub use numeric::*;
pub use units::*;
