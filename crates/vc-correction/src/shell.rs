//! Correction for thermal expansion of the tank shell.

use vc_core::units::Fahrenheit;
use vc_core::{Real, round_half_up};

/// Linear expansion coefficient of a carbon-steel shell, per °F.
pub const STEEL_EXPANSION_PER_F: Real = 0.0000062;

/// Weight of the liquid temperature in the shell-temperature estimate.
const LIQUID_WEIGHT: Real = 7.0;

/// Decimal places of the reported shell correction.
pub const SHELL_FACTOR_DECIMALS: u32 = 5;

/// Shell temperature estimate, rounded to whole degrees.
///
/// An uninsulated shell sits mostly at liquid temperature: seven parts liquid
/// to one part ambient.
pub fn shell_temperature(ambient_f: Fahrenheit, liquid_f: Fahrenheit) -> Fahrenheit {
    round_half_up((ambient_f + LIQUID_WEIGHT * liquid_f) / (LIQUID_WEIGHT + 1.0), 0)
}

/// Shell correction factor (CTSh) relative to the tank's calibration
/// (lamination) temperature, rounded to 5 decimals.
///
/// Depends on the three temperatures only.
pub fn shell_correction(
    ambient_f: Fahrenheit,
    liquid_f: Fahrenheit,
    lamination_f: Fahrenheit,
) -> Real {
    let delta_t = shell_temperature(ambient_f, liquid_f) - lamination_f;
    let factor = 1.0
        + STEEL_EXPANSION_PER_F * 2.0 * delta_t
        + STEEL_EXPANSION_PER_F.powi(2) * delta_t.powi(2);
    round_half_up(factor, SHELL_FACTOR_DECIMALS)
}
