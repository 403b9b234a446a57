//! Floating-roof adjustment.

use serde::{Deserialize, Serialize};
use vc_core::units::{ApiGravity, Fahrenheit, TankVolume};
use vc_core::{Real, round_half_up};

use crate::error::{CorrectionError, EngineResult};

/// Decimal places of the reported roof adjustment.
pub const ROOF_ADJUSTMENT_DECIMALS: u32 = 2;

/// Per-tank calibration constants supplied by the tank metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofConstants {
    /// Reference gravity of the roof displacement table (°API).
    pub kfra1: Real,
    /// Volume displaced per °API of difference.
    pub kfra2: Real,
    /// Temperature at which the tank was strapped.
    pub lamination_temp_f: Fahrenheit,
}

impl RoofConstants {
    pub fn new(kfra1: Real, kfra2: Real, lamination_temp_f: Fahrenheit) -> Self {
        Self {
            kfra1,
            kfra2,
            lamination_temp_f,
        }
    }

    /// Constants of a fixed-roof tank: no roof displacement.
    pub fn fixed_roof(lamination_temp_f: Fahrenheit) -> Self {
        Self::new(0.0, 0.0, lamination_temp_f)
    }

    pub fn is_floating(&self) -> bool {
        self.kfra1 != 0.0 || self.kfra2 != 0.0
    }

    pub fn validate(&self) -> EngineResult<()> {
        for (value, field) in [(self.kfra1, "kfra1"), (self.kfra2, "kfra2")] {
            if !value.is_finite() {
                return Err(CorrectionError::InvalidMeasurement {
                    field,
                    reason: format!("roof constant must be finite, got {value}"),
                });
            }
        }
        if !self.lamination_temp_f.is_finite() {
            return Err(CorrectionError::NumericDomain {
                field: "lamination_temp_f",
                reason: format!("temperature must be finite, got {}", self.lamination_temp_f),
            });
        }
        Ok(())
    }
}

/// Floating-roof adjustment (FRA), rounded to 2 decimals.
///
/// `(kfra1 - observed_api) * kfra2`; zero for fixed-roof tanks.
pub fn roof_adjustment(roof: &RoofConstants, observed_api: ApiGravity) -> TankVolume {
    if !roof.is_floating() {
        return 0.0;
    }
    round_half_up(
        (roof.kfra1 - observed_api) * roof.kfra2,
        ROOF_ADJUSTMENT_DECIMALS,
    )
}
