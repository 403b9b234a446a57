//! Tank gauging reading.

use serde::{Deserialize, Serialize};
use vc_core::units::{ApiGravity, Fahrenheit, Percent, TankVolume};
use vc_core::{Real, VcError, ensure_non_negative};

use crate::crude::CrudeClass;
use crate::error::{CorrectionError, EngineResult};

/// One gauging of a tank, as taken by the inspector.
///
/// Gauges and volumes share whatever unit the tank's strapping table uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub classification: CrudeClass,
    /// Liquid level (innage).
    pub gauge: Real,
    /// Total observed volume at `gauge`.
    pub tov: TankVolume,
    /// Free-water level.
    pub water_gauge: Real,
    /// Free-water volume at `water_gauge`.
    pub water_tov: TankVolume,
    pub liquid_temp_f: Fahrenheit,
    pub ambient_temp_f: Fahrenheit,
    /// API gravity corrected to 60 °F.
    pub api60: ApiGravity,
    /// Water and sediment content of the oil.
    pub bsw_percent: Percent,
}

/// Water and sediment percentage from the two lab results.
pub fn bsw_from_parts(water_percent: Percent, sediment_percent: Percent) -> Percent {
    water_percent + sediment_percent
}

fn measurement(value: Real, field: &'static str) -> EngineResult<Real> {
    ensure_non_negative(value, field).map_err(|err| match err {
        VcError::NonFinite { value, .. } => CorrectionError::InvalidMeasurement {
            field,
            reason: format!("must be finite, got {value}"),
        },
        other => other.into(),
    })
}

fn temperature(value: Fahrenheit, field: &'static str) -> EngineResult<Fahrenheit> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CorrectionError::NumericDomain {
            field,
            reason: format!("temperature must be finite, got {value}"),
        })
    }
}

impl Reading {
    /// Check every precondition of the correction.
    ///
    /// Gravity is checked by the reference-density step, which needs the
    /// same bound.
    pub fn validate(&self) -> EngineResult<()> {
        measurement(self.gauge, "gauge")?;
        let tov = measurement(self.tov, "tov")?;
        measurement(self.water_gauge, "water_gauge")?;
        let water_tov = measurement(self.water_tov, "water_tov")?;
        if tov < water_tov {
            return Err(CorrectionError::InvalidMeasurement {
                field: "water_tov",
                reason: format!("free water {water_tov} exceeds total observed volume {tov}"),
            });
        }

        let bsw = measurement(self.bsw_percent, "bsw_percent")?;
        if bsw > 100.0 {
            return Err(CorrectionError::InvalidMeasurement {
                field: "bsw_percent",
                reason: format!("must be at most 100, got {bsw}"),
            });
        }

        temperature(self.liquid_temp_f, "liquid_temp_f")?;
        temperature(self.ambient_temp_f, "ambient_temp_f")?;
        Ok(())
    }

    /// Volume of oil above the free water, before any correction.
    pub fn net_observed(&self) -> TankVolume {
        self.tov - self.water_tov
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Class A, API 30, 80 °F liquid, 85 °F ambient, 1000 / 10, 0.5 % BSW.
    pub fn reference_reading() -> Reading {
        Reading {
            classification: CrudeClass::A,
            gauge: 1250.0,
            tov: 1000.0,
            water_gauge: 12.0,
            water_tov: 10.0,
            liquid_temp_f: 80.0,
            ambient_temp_f: 85.0,
            api60: 30.0,
            bsw_percent: 0.5,
        }
    }
}
