//! vc-correction: petroleum volume correction for tank gaugings.
//!
//! Turns a tank gauging (levels, volumes, temperatures, API gravity, crude
//! class) plus the tank's roof constants into standard volumes:
//! - liquid-temperature correction (CTL) from a closed-form density correlation
//! - shell-temperature correction (CTSh)
//! - observed API gravity and floating-roof adjustment (FRA)
//! - gross observed, gross standard and net standard volume (GOV, GSV, NSV)
//!
//! Everything is calibrated to °F and kg/m³. Each reported quantity is rounded
//! once, where it is produced, and downstream steps consume the rounded value.
//!
//! # Example
//!
//! ```
//! use vc_correction::{CorrectionEngine, CrudeClass, Reading, RoofConstants};
//!
//! let reading = Reading {
//!     classification: CrudeClass::A,
//!     gauge: 1250.0,
//!     tov: 1000.0,
//!     water_gauge: 12.0,
//!     water_tov: 10.0,
//!     liquid_temp_f: 80.0,
//!     ambient_temp_f: 85.0,
//!     api60: 30.0,
//!     bsw_percent: 0.5,
//! };
//! let roof = RoofConstants::fixed_roof(75.0);
//!
//! let result = CorrectionEngine::new().compute(&reading, &roof).unwrap();
//! assert_eq!(result.gsv, 981.23);
//! assert_eq!(result.nsv, 976.32);
//! ```

pub mod correlation;
pub mod crude;
pub mod engine;
pub mod error;
pub mod gravity;
pub mod movement;
pub mod reading;
pub mod roof;
pub mod shell;
pub mod tank;
pub mod temperature;
pub mod volume;

// Re-exports for ergonomics
pub use crude::{ConstantTuple, CrudeClass, DensityBand, lookup};
pub use engine::{CorrectionEngine, CorrectionResult, Derivation, ENGINE_VERSION};
pub use error::{CorrectionError, EngineResult};
pub use movement::{MovementDelta, Settlement};
pub use reading::{Reading, bsw_from_parts};
pub use roof::{RoofConstants, roof_adjustment};
pub use shell::shell_correction;
pub use tank::{InMemoryTankCatalog, TankCatalog, TankProfile};
pub use volume::Volumes;
