//! Correction engine errors.

use vc_core::VcError;
use thiserror::Error;

/// Result type for correction operations.
pub type EngineResult<T> = Result<T, CorrectionError>;

/// Precondition failures detected before any correction is produced.
///
/// Every variant names the offending input field. None of them is transient:
/// the engine is a pure function, so the same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrectionError {
    /// Classification code outside {A, B, D}, or no density band matched.
    #[error("Invalid crude classification ({field}): {reason}")]
    InvalidCrudeClassification { field: &'static str, reason: String },

    /// Negative, non-finite or inconsistent gauging input.
    #[error("Invalid measurement ({field}): {reason}")]
    InvalidMeasurement { field: &'static str, reason: String },

    /// Input or intermediate outside the domain of the correlation.
    #[error("Numeric domain error ({field}): {reason}")]
    NumericDomain { field: &'static str, reason: String },

    /// The tank metadata port has no entry for this tank.
    #[error("Unknown tank: {tank_id}")]
    UnknownTank { tank_id: String },
}

impl CorrectionError {
    /// Name of the input field the failure refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidCrudeClassification { field, .. }
            | Self::InvalidMeasurement { field, .. }
            | Self::NumericDomain { field, .. } => field,
            Self::UnknownTank { .. } => "tank_id",
        }
    }
}

impl From<VcError> for CorrectionError {
    fn from(err: VcError) -> Self {
        match err {
            VcError::NonFinite { what, value } => CorrectionError::NumericDomain {
                field: what,
                reason: format!("non-finite value {value}"),
            },
            VcError::Negative { what, value } => CorrectionError::InvalidMeasurement {
                field: what,
                reason: format!("must not be negative, got {value}"),
            },
        }
    }
}
