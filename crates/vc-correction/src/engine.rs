//! Correction engine facade.
//!
//! `CorrectionEngine::compute` validates a reading, derives every correction
//! once and returns an immutable [`CorrectionResult`].
//!
//! The liquid-temperature correction and the observed gravity each feed more
//! than one downstream quantity. They live in once-cells on a per-call
//! [`Derivation`], so every consumer sees the same bits.

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vc_core::units::{ApiGravity, Fahrenheit, KgPerM3, TankVolume};
use vc_core::{Real, round_half_up};

use crate::correlation::{CTL_EXPONENT, correction_factor};
use crate::crude::{ConstantTuple, lookup};
use crate::error::{CorrectionError, EngineResult};
use crate::gravity::{observed_gravity, reference_density};
use crate::reading::Reading;
use crate::roof::{RoofConstants, roof_adjustment};
use crate::shell::shell_correction;
use crate::tank::TankCatalog;
use crate::temperature::ipts68_fahrenheit;
use crate::volume::{self, Volumes};

/// Version stamped into settlement fingerprints.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places of the reported liquid-temperature correction.
pub const CTL_DECIMALS: u32 = 5;

/// Densities the correlation was fitted over. Outside it results are still
/// produced but should be checked against the printed tables.
pub const CALIBRATED_DENSITY_RANGE: (KgPerM3, KgPerM3) = (610.6, 1163.5);

/// Corrected quantities for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionResult {
    /// Liquid-temperature correction (CTL), 5 decimals.
    pub ctl: Real,
    /// Shell-temperature correction (CTSh), 5 decimals.
    pub ctsh: Real,
    /// Observed API gravity at liquid temperature, 1 decimal.
    pub observed_api: ApiGravity,
    /// Floating-roof adjustment (FRA), 2 decimals.
    pub roof_adjustment: TankVolume,
    /// Gross observed volume, unrounded.
    pub gov: TankVolume,
    /// Gross standard volume, 2 decimals.
    pub gsv: TankVolume,
    /// Net standard volume, 2 decimals.
    pub nsv: TankVolume,
}

/// Per-call dependency graph of the correction.
///
/// Density, band constants and the IPTS-68 temperature are computed eagerly
/// since every path needs them; the two correlation runs are memoized.
#[derive(Debug)]
pub struct Derivation {
    density: KgPerM3,
    constants: ConstantTuple,
    t68_f: Fahrenheit,
    ctl: OnceCell<Real>,
    observed_api: OnceCell<ApiGravity>,
}

impl Derivation {
    /// Build the root nodes. The reading must already be validated.
    pub fn new(reading: &Reading) -> EngineResult<Self> {
        let density = reference_density(reading.api60)?;
        let constants = lookup(reading.classification, density)?;
        let t68_f = ipts68_fahrenheit(reading.liquid_temp_f);

        let (lo, hi) = CALIBRATED_DENSITY_RANGE;
        if density < lo || density >= hi {
            warn!(
                density,
                api60 = reading.api60,
                "reference density outside the calibrated range"
            );
        }

        Ok(Self {
            density,
            constants,
            t68_f,
            ctl: OnceCell::new(),
            observed_api: OnceCell::new(),
        })
    }

    pub fn density(&self) -> KgPerM3 {
        self.density
    }

    pub fn constants(&self) -> &ConstantTuple {
        &self.constants
    }

    pub fn t68_f(&self) -> Fahrenheit {
        self.t68_f
    }

    /// Liquid-temperature correction, rounded to 5 decimals.
    pub fn ctl(&self) -> EngineResult<Real> {
        if let Some(ctl) = self.ctl.get() {
            return Ok(*ctl);
        }
        let raw = correction_factor(&self.constants, CTL_EXPONENT, self.density, self.t68_f)?;
        let ctl = round_half_up(raw, CTL_DECIMALS);
        if ctl <= 0.0 {
            return Err(CorrectionError::NumericDomain {
                field: "ctl",
                reason: format!("correction vanishes at {} °F", self.t68_f),
            });
        }
        Ok(*self.ctl.get_or_init(|| ctl))
    }

    /// Observed API gravity, rounded to 0.1.
    pub fn observed_api(&self) -> EngineResult<ApiGravity> {
        if let Some(api) = self.observed_api.get() {
            return Ok(*api);
        }
        let api = observed_gravity(&self.constants, self.density, self.t68_f)?;
        Ok(*self.observed_api.get_or_init(|| api))
    }
}

/// Stateless facade over the correction steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrectionEngine;

impl CorrectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Correct one reading against its tank's roof constants.
    pub fn compute(
        &self,
        reading: &Reading,
        roof: &RoofConstants,
    ) -> EngineResult<CorrectionResult> {
        reading.validate()?;
        roof.validate()?;

        let derivation = Derivation::new(reading)?;

        let ctsh = shell_correction(
            reading.ambient_temp_f,
            reading.liquid_temp_f,
            roof.lamination_temp_f,
        );
        let observed_api = derivation.observed_api()?;
        let fra = roof_adjustment(roof, observed_api);
        let ctl = derivation.ctl()?;

        let Volumes { gov, gsv, nsv } = volume::compose(
            reading.tov,
            reading.water_tov,
            ctsh,
            fra,
            ctl,
            reading.bsw_percent,
        )?;

        let result = CorrectionResult {
            ctl,
            ctsh,
            observed_api,
            roof_adjustment: fra,
            gov,
            gsv,
            nsv,
        };

        debug!(
            class = %reading.classification,
            density = derivation.density(),
            ctl,
            ctsh,
            observed_api,
            fra,
            gsv,
            nsv,
            "reading corrected"
        );

        Ok(result)
    }

    /// Resolve roof constants through `catalog`, then [`Self::compute`].
    pub fn compute_for_tank(
        &self,
        catalog: &dyn TankCatalog,
        tank_id: &str,
        reading: &Reading,
    ) -> EngineResult<CorrectionResult> {
        let tank = catalog
            .tank(tank_id)
            .ok_or_else(|| CorrectionError::UnknownTank {
                tank_id: tank_id.to_string(),
            })?;
        debug!(tank_id, tank = %tank.name, "resolved tank constants");
        self.compute(reading, &tank.roof)
    }
}
