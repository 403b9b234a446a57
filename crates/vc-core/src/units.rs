// vc-core/src/units.rs
//
// The correction tables are calibrated to one fixed unit set, so quantities
// stay plain `f64` with the unit carried in the alias name. Converting through
// a unit library would re-round every temperature on the way in.

use crate::Real;

/// Temperature in degrees Fahrenheit.
pub type Fahrenheit = Real;

/// Temperature in degrees Celsius.
pub type Celsius = Real;

/// Mass density in kg/m³.
pub type KgPerM3 = Real;

/// Degrees API.
pub type ApiGravity = Real;

/// Tank volume in the tank's strapping-table unit (barrels, m³, ...).
///
/// The engine never converts volumes; every volume of a reading must share
/// the same unit and the results come back in it.
pub type TankVolume = Real;

/// Percentage in `[0, 100]`.
pub type Percent = Real;

pub mod constants {
    use super::*;

    /// Density of water at 60 °F used by the API gravity definition.
    pub const WATER_DENSITY_60F_KG_M3: KgPerM3 = 999.016;

    /// Numerator of the API gravity definition, `API = 141.5 / RD - 131.5`.
    pub const API_NUMERATOR: Real = 141.5;

    /// Offset of the API gravity definition.
    pub const API_OFFSET: Real = 131.5;

    /// Fahrenheit offset of the freezing point.
    pub const FREEZING_POINT_F: Fahrenheit = 32.0;

    /// Degrees Fahrenheit per degree Celsius.
    pub const F_PER_C: Real = 1.8;

    #[inline]
    pub fn relative_density_from_api(api: ApiGravity) -> Real {
        API_NUMERATOR / (api + API_OFFSET)
    }

    #[inline]
    pub fn api_from_relative_density(rd: Real) -> ApiGravity {
        API_NUMERATOR / rd - API_OFFSET
    }
}
