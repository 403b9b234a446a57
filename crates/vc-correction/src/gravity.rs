//! Reference density and observed API gravity.

use vc_core::units::constants::{
    API_OFFSET, WATER_DENSITY_60F_KG_M3, api_from_relative_density, relative_density_from_api,
};
use vc_core::units::{ApiGravity, Fahrenheit, KgPerM3};
use vc_core::{Real, round_half_up};

use crate::correlation::correction_factor;
use crate::crude::ConstantTuple;
use crate::error::{CorrectionError, EngineResult};

/// Decimal places of the reported observed gravity.
pub const OBSERVED_GRAVITY_DECIMALS: u32 = 1;

/// Density at 60 °F (kg/m³) for an API gravity at 60 °F.
pub fn reference_density(api60: ApiGravity) -> EngineResult<KgPerM3> {
    if !api60.is_finite() {
        return Err(CorrectionError::NumericDomain {
            field: "api60",
            reason: format!("API gravity must be finite, got {api60}"),
        });
    }
    if api60 <= -API_OFFSET {
        return Err(CorrectionError::NumericDomain {
            field: "api60",
            reason: format!("API gravity must exceed -{API_OFFSET}, got {api60}"),
        });
    }
    Ok(relative_density_from_api(api60) * WATER_DENSITY_60F_KG_M3)
}

/// API gravity the hydrometer would read at the liquid temperature,
/// rounded to 0.1 °API.
///
/// Runs the correlation with the band exponent `j0` rather than the fixed CTL
/// exponent. The reading is taken at atmospheric pressure, so no
/// compressibility term is applied.
pub fn observed_gravity(
    constants: &ConstantTuple,
    density: KgPerM3,
    t68_f: Fahrenheit,
) -> EngineResult<ApiGravity> {
    let ctlb = correction_factor(constants, constants.j0, density, t68_f)?;
    let observed_density: Real = density * ctlb;
    if observed_density <= 0.0 {
        return Err(CorrectionError::NumericDomain {
            field: "observed_api",
            reason: format!("observed density collapsed to {observed_density} at {t68_f} °F"),
        });
    }
    let api = api_from_relative_density(observed_density / WATER_DENSITY_60F_KG_M3);
    if !api.is_finite() {
        return Err(CorrectionError::NumericDomain {
            field: "observed_api",
            reason: format!("observed gravity is not finite: {api}"),
        });
    }
    Ok(round_half_up(api, OBSERVED_GRAVITY_DECIMALS))
}
