//! Gross and net volume composition.

use serde::{Deserialize, Serialize};
use vc_core::units::{Percent, TankVolume};
use vc_core::{Real, ensure_finite, round_half_up};

use crate::error::EngineResult;

/// Decimal places of reported standard volumes.
pub const STANDARD_VOLUME_DECIMALS: u32 = 2;

/// Gross observed, gross standard and net standard volume of one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volumes {
    /// Unrounded: it is an intermediate of GSV and NSV.
    pub gov: TankVolume,
    pub gsv: TankVolume,
    pub nsv: TankVolume,
}

/// Gross observed volume: oil volume corrected for shell expansion and roof
/// displacement.
pub fn gross_observed(
    tov: TankVolume,
    water_tov: TankVolume,
    shell_factor: Real,
    roof_adjustment: TankVolume,
) -> TankVolume {
    (tov - water_tov) * shell_factor + roof_adjustment
}

/// Gross standard volume at 60 °F, rounded to 2 decimals.
pub fn gross_standard(gov: TankVolume, liquid_factor: Real) -> TankVolume {
    round_half_up(gov * liquid_factor, STANDARD_VOLUME_DECIMALS)
}

/// Net standard volume: GSV less water and sediment, rounded to 2 decimals.
///
/// Computed from the unrounded GSV product so that it is not rounded twice.
pub fn net_standard(gov: TankVolume, liquid_factor: Real, bsw_percent: Percent) -> TankVolume {
    round_half_up(
        gov * liquid_factor * (1.0 - bsw_percent / 100.0),
        STANDARD_VOLUME_DECIMALS,
    )
}

/// Compose all three volumes from already-rounded correction factors.
///
/// Fails with `NumericDomain` if any volume is not finite.
pub fn compose(
    tov: TankVolume,
    water_tov: TankVolume,
    shell_factor: Real,
    roof_adjustment: TankVolume,
    liquid_factor: Real,
    bsw_percent: Percent,
) -> EngineResult<Volumes> {
    let gov = ensure_finite(
        gross_observed(tov, water_tov, shell_factor, roof_adjustment),
        "gov",
    )?;
    Ok(Volumes {
        gov,
        gsv: ensure_finite(gross_standard(gov, liquid_factor), "gsv")?,
        nsv: ensure_finite(net_standard(gov, liquid_factor, bsw_percent), "nsv")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_fixture_volumes() {
        let v = compose(1000.0, 10.0, 1.00007, 0.0, 0.99107, 0.5).unwrap();
        assert_eq!(v.gov, 990.0693);
        assert_eq!(v.gsv, 981.23);
        assert_eq!(v.nsv, 976.32);
    }

    #[test]
    fn zero_sediment_makes_nsv_equal_gsv() {
        let v = compose(5000.0, 12.5, 0.99981, 0.0, 1.00412, 0.0).unwrap();
        assert_eq!(v.nsv, v.gsv);
    }

    #[test]
    fn roof_adjustment_enters_gov_unscaled() {
        let v = compose(25000.0, 150.0, 1.0004, -9.36, 0.98188, 0.3).unwrap();
        assert_eq!(v.gov, 24850.579999999998);
        assert_eq!(v.gsv, 24400.29);
        assert_eq!(v.nsv, 24327.09);
    }

    #[test]
    fn non_finite_volume_is_domain_error() {
        let err = compose(1000.0, 10.0, 1.0, f64::NEG_INFINITY, 0.99, 0.0).unwrap_err();
        assert_eq!(
            err,
            crate::error::CorrectionError::NumericDomain {
                field: "gov",
                reason: "non-finite value -inf".into(),
            }
        );
    }
}
