//! Transferred volume between an opening and a closing gauging.

use serde::{Deserialize, Serialize};
use vc_core::round_half_up;
use vc_core::units::TankVolume;

use crate::engine::CorrectionResult;
use crate::reading::Reading;
use crate::volume::STANDARD_VOLUME_DECIMALS;

/// A reading together with its correction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub reading: Reading,
    pub result: CorrectionResult,
}

/// Opening minus closing, per quantity.
///
/// Positive values mean the tank delivered (volume went down).
///
/// GSV and NSV are re-rounded to two decimals rather than kept as the raw
/// difference of the two readings, so a delta carries the same precision as
/// the volumes it is taken from. TOV and free water are raw differences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementDelta {
    pub tov: TankVolume,
    pub free_water: TankVolume,
    pub gsv: TankVolume,
    pub nsv: TankVolume,
}

impl MovementDelta {
    pub fn between(opening: &Settlement, closing: &Settlement) -> Self {
        Self {
            tov: opening.reading.tov - closing.reading.tov,
            free_water: opening.reading.water_tov - closing.reading.water_tov,
            gsv: round_half_up(
                opening.result.gsv - closing.result.gsv,
                STANDARD_VOLUME_DECIMALS,
            ),
            nsv: round_half_up(
                opening.result.nsv - closing.result.nsv,
                STANDARD_VOLUME_DECIMALS,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CorrectionEngine;
    use crate::reading::fixtures::reference_reading;
    use crate::roof::RoofConstants;

    #[test]
    fn delivery_is_positive() {
        let engine = CorrectionEngine::new();
        let roof = RoofConstants::fixed_roof(75.0);

        let opening_reading = reference_reading();
        let closing_reading = Reading {
            gauge: 300.0,
            tov: 250.0,
            ..reference_reading()
        };
        let opening = Settlement {
            reading: opening_reading,
            result: engine.compute(&opening_reading, &roof).unwrap(),
        };
        let closing = Settlement {
            reading: closing_reading,
            result: engine.compute(&closing_reading, &roof).unwrap(),
        };

        let delta = MovementDelta::between(&opening, &closing);
        assert_eq!(delta.tov, 750.0);
        assert_eq!(delta.gsv, round_half_up(delta.gsv, STANDARD_VOLUME_DECIMALS));
        assert_eq!(delta.free_water, 0.0);
        assert!(delta.gsv > 0.0);
        assert!(delta.nsv < delta.gsv);

        let reverse = MovementDelta::between(&closing, &opening);
        assert_eq!(reverse.gsv, -delta.gsv);
    }
}
