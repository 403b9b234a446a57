//! Settlement report types.

use serde::{Deserialize, Serialize};
use vc_correction::{CorrectionResult, CrudeClass, MovementDelta};
use vc_ticket::LoadDef;

use crate::error::{AppError, AppResult};

/// Corrected volumes of one reading in a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingReport {
    pub reading_id: String,
    pub tank_id: String,
    pub classification: CrudeClass,
    pub tov: f64,
    pub water_tov: f64,
    pub bsw_percent: f64,
    pub result: CorrectionResult,
}

/// Transferred volumes of one movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementReport {
    pub movement_id: String,
    pub tank_id: String,
    pub opening_reading_id: String,
    pub closing_reading_id: String,
    pub delta: MovementDelta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    pub ticket_name: String,
    /// Commercial header copied from the ticket.
    #[serde(default)]
    pub load: LoadDef,
    /// RFC 3339 timestamp of when the report was computed.
    pub generated_at: String,
    pub engine_version: String,
    /// See [`crate::fingerprint::ticket_fingerprint`].
    pub input_fingerprint: String,
    pub readings: Vec<ReadingReport>,
    pub movements: Vec<MovementReport>,
}

impl SettlementReport {
    pub fn reading(&self, reading_id: &str) -> Option<&ReadingReport> {
        self.readings.iter().find(|r| r.reading_id == reading_id)
    }

    pub fn movement(&self, movement_id: &str) -> Option<&MovementReport> {
        self.movements.iter().find(|m| m.movement_id == movement_id)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Report(format!("Failed to serialize report: {}", e)))
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Report(format!("Failed to serialize report: {}", e)))
    }
}
