//! Closed-form volume correction for temperature.
//!
//! Stands in for the interpolation tables: from a density at 60 °F, a
//! temperature on the IPTS-68 scale and the band constants it produces the
//! ratio of volume at temperature to volume at 60 °F.
//!
//! ```text
//! A   = (C1/2) · ((k0/ρ + k1)/ρ + k2)
//! B   = (e·k0 + k1·ρ) / (k0 + (k1 + k2·ρ)·ρ)
//! ρr  = ρ · (1 + (exp(A·(1 + 0.8·A)) − 1) / (1 + A·(1 + 1.6·A)·B))
//! α60 = (k0/ρr + k1)/ρr + k2
//! Δt  = t68 − 60.0068749
//! CTL = exp(−α60 · Δt · (1 + 0.8·α60·(Δt + C1)))
//! ```
//!
//! Operand order matches the published procedure; reassociating any product
//! changes the last bits of the result.

use tracing::trace;
use vc_core::units::{Fahrenheit, KgPerM3};
use vc_core::{Real, ensure_finite};

use crate::crude::ConstantTuple;
use crate::error::{CorrectionError, EngineResult};

/// Temperature shift constant `C1`, in °F.
pub const C1: Real = 0.01374979547;

/// 60 °F expressed on the IPTS-68 scale.
pub const BASE_TEMPERATURE_IPTS68_F: Fahrenheit = 60.0068749;

/// Exponent used for the liquid-temperature correction.
pub const CTL_EXPONENT: Real = 2.0;

/// Thermal expansion coefficient at 60 °F after shifting the density to the
/// correlation's base temperature.
pub fn alpha60(constants: &ConstantTuple, exponent: Real, density: KgPerM3) -> Real {
    let ConstantTuple { k0, k1, k2, .. } = *constants;

    let a = C1 / 2.0 * ((k0 / density + k1) / density + k2);
    let b = (exponent * k0 + k1 * density) / (k0 + (k1 + k2 * density) * density);
    let shifted =
        density * (1.0 + ((a * (1.0 + 0.8 * a)).exp() - 1.0) / (1.0 + a * (1.0 + 1.6 * a) * b));

    (k0 / shifted + k1) / shifted + k2
}

/// Correction factor for `density` (kg/m³ at 60 °F) at `t68_f`.
///
/// The result is unrounded; callers round where the quantity is first
/// reported.
pub fn correction_factor(
    constants: &ConstantTuple,
    exponent: Real,
    density: KgPerM3,
    t68_f: Fahrenheit,
) -> EngineResult<Real> {
    if !density.is_finite() || density <= 0.0 {
        return Err(CorrectionError::NumericDomain {
            field: "density",
            reason: format!("density must be positive and finite, got {density}"),
        });
    }

    let a60 = ensure_finite(alpha60(constants, exponent, density), "alpha60")?;
    let dt = t68_f - BASE_TEMPERATURE_IPTS68_F;
    let factor = (-a60 * dt * (1.0 + 0.8 * a60 * (dt + C1))).exp();

    trace!(density, exponent, t68_f, a60, factor, "density correlation");

    ensure_finite(factor, "correction_factor").map_err(CorrectionError::from)
}
