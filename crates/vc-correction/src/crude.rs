//! Crude classification codes and their correlation constants.
//!
//! Each classification owns an ordered list of density bands. A band applies
//! when the reference density is strictly below its upper bound; the first
//! matching band wins. Classes A and D have a single unbounded band.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vc_core::units::KgPerM3;
use vc_core::Real;

use crate::error::{CorrectionError, EngineResult};

/// Crude classification code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrudeClass {
    /// Crude oils.
    A,
    /// Refined products, banded by density.
    B,
    /// Lubricating oils.
    D,
}

impl CrudeClass {
    pub const ALL: [CrudeClass; 3] = [CrudeClass::A, CrudeClass::B, CrudeClass::D];

    pub fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::D => "D",
        }
    }

    /// Ordered density bands for this class.
    pub fn bands(self) -> &'static [DensityBand] {
        match self {
            Self::A => &CLASS_A_BANDS,
            Self::B => &CLASS_B_BANDS,
            Self::D => &CLASS_D_BANDS,
        }
    }
}

impl fmt::Display for CrudeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CrudeClass {
    type Err = CorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "D" | "d" => Ok(Self::D),
            other => Err(CorrectionError::InvalidCrudeClassification {
                field: "classification",
                reason: format!("unrecognized code '{other}', expected one of A, B, D"),
            }),
        }
    }
}

/// Correlation constants `{k0, k1, k2, j0}` for one crude band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantTuple {
    pub k0: Real,
    pub k1: Real,
    pub k2: Real,
    /// Exponent used when back-calculating observed gravity.
    pub j0: Real,
}

impl ConstantTuple {
    pub const fn new(k0: Real, k1: Real, k2: Real, j0: Real) -> Self {
        Self { k0, k1, k2, j0 }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityBand {
    /// Exclusive upper bound on reference density.
    pub upper_bound: KgPerM3,
    pub constants: ConstantTuple,
}

const fn band(upper_bound: KgPerM3, constants: ConstantTuple) -> DensityBand {
    DensityBand {
        upper_bound,
        constants,
    }
}

static CLASS_A_BANDS: [DensityBand; 1] = [band(
    f64::INFINITY,
    ConstantTuple::new(341.0957, 0.0, 0.0, 2.0),
)];

static CLASS_D_BANDS: [DensityBand; 1] = [band(
    f64::INFINITY,
    ConstantTuple::new(0.0, 0.34878, 0.0, 1.0),
)];

static CLASS_B_BANDS: [DensityBand; 4] = [
    band(770.352, ConstantTuple::new(192.4571, 0.2438, 0.0, 1.5)),
    band(787.5195, ConstantTuple::new(1489.067, 0.0, -0.0018684, 8.5)),
    band(838.3127, ConstantTuple::new(330.301, 0.0, 0.0, 2.0)),
    band(1163.5, ConstantTuple::new(103.872, 0.2701, 0.0, 1.3)),
];

/// Select the constants for `class` at `reference_density`.
///
/// A density at or above the last bound of its class, or a NaN density, has
/// no band and is rejected.
pub fn lookup(class: CrudeClass, reference_density: KgPerM3) -> EngineResult<ConstantTuple> {
    class
        .bands()
        .iter()
        .find(|band| reference_density < band.upper_bound)
        .map(|band| band.constants)
        .ok_or_else(|| CorrectionError::InvalidCrudeClassification {
            field: "api60",
            reason: format!(
                "no class {class} density band contains {reference_density} kg/m³"
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_a_ignores_density() {
        let c = lookup(CrudeClass::A, 875.0).unwrap();
        assert_eq!(c, ConstantTuple::new(341.0957, 0.0, 0.0, 2.0));
        assert_eq!(lookup(CrudeClass::A, 1500.0).unwrap(), c);
    }

    #[test]
    fn class_d_constants() {
        let c = lookup(CrudeClass::D, 900.0).unwrap();
        assert_eq!(c.k0, 0.0);
        assert_eq!(c.k1, 0.34878);
        assert_eq!(c.j0, 1.0);
    }

    #[test]
    fn class_b_walks_bands_in_order() {
        assert_eq!(lookup(CrudeClass::B, 738.18).unwrap().j0, 1.5);
        assert_eq!(lookup(CrudeClass::B, 778.85).unwrap().j0, 8.5);
        assert_eq!(lookup(CrudeClass::B, 800.91).unwrap().j0, 2.0);
        assert_eq!(lookup(CrudeClass::B, 933.07).unwrap().j0, 1.3);
    }

    #[test]
    fn band_edge_selects_next_band() {
        let below = lookup(CrudeClass::B, 770.351999).unwrap();
        let at = lookup(CrudeClass::B, 770.352000).unwrap();
        assert_eq!(below.k0, 192.4571);
        assert_eq!(at.k0, 1489.067);
        assert_eq!(at.k2, -0.0018684);
        assert_ne!(below, at);
    }

    #[test]
    fn class_b_above_last_band_is_rejected() {
        let err = lookup(CrudeClass::B, 1163.5).unwrap_err();
        assert!(matches!(
            err,
            CorrectionError::InvalidCrudeClassification { .. }
        ));
    }

    #[test]
    fn nan_density_has_no_band() {
        assert!(lookup(CrudeClass::A, f64::NAN).is_err());
    }

    #[test]
    fn parse_codes() {
        assert_eq!("A".parse::<CrudeClass>().unwrap(), CrudeClass::A);
        assert_eq!(" b ".parse::<CrudeClass>().unwrap(), CrudeClass::B);
        assert_eq!("D".parse::<CrudeClass>().unwrap(), CrudeClass::D);
        let err = "X".parse::<CrudeClass>().unwrap_err();
        assert!(matches!(
            err,
            CorrectionError::InvalidCrudeClassification {
                field: "classification",
                ..
            }
        ));
    }

    #[test]
    fn display_round_trips_code() {
        for class in CrudeClass::ALL {
            assert_eq!(class.to_string().parse::<CrudeClass>().unwrap(), class);
        }
    }
}
