//! Ticket schema definitions.

use serde::{Deserialize, Serialize};

/// One gauging ticket: the tanks involved, their readings and the movements
/// to settle between readings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub load: LoadDef,
    #[serde(default)]
    pub tanks: Vec<TankDef>,
    #[serde(default)]
    pub readings: Vec<ReadingDef>,
    #[serde(default)]
    pub movements: Vec<MovementDef>,
}

/// Commercial header of the load being settled. Every field is optional and
/// only carried through to the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoadDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
}

impl LoadDef {
    /// Labelled fields that are set, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Reference", &self.reference),
            ("Client reference", &self.client_reference),
            ("Buyer", &self.buyer),
            ("Seller", &self.seller),
            ("Destination", &self.destination),
            ("Inspector", &self.inspector),
            ("Terminal", &self.terminal),
            ("Vessel", &self.vessel_name),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

/// Calibration data of a tank, as published by the tank-metadata service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TankDef {
    pub id: String,
    pub name: String,
    /// Floating-roof reference gravity; 0 for fixed-roof tanks.
    #[serde(default)]
    pub kfra1: f64,
    /// Floating-roof volume per °API; 0 for fixed-roof tanks.
    #[serde(default)]
    pub kfra2: f64,
    pub lamination_temp_f: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingDef {
    pub id: String,
    pub tank_id: String,
    /// Crude classification code (A, B or D).
    pub classification: String,
    #[serde(default)]
    pub gauge: f64,
    pub tov: f64,
    #[serde(default)]
    pub water_gauge: f64,
    #[serde(default)]
    pub water_tov: f64,
    pub liquid_temp_f: f64,
    pub ambient_temp_f: f64,
    pub api60: f64,
    #[serde(default)]
    pub water_percent: f64,
    #[serde(default)]
    pub sediment_percent: f64,
}

/// Opening and closing gauging of one tank around a transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovementDef {
    pub id: String,
    pub opening_reading_id: String,
    pub closing_reading_id: String,
}

impl Ticket {
    pub fn tank(&self, id: &str) -> Option<&TankDef> {
        self.tanks.iter().find(|t| t.id == id)
    }

    pub fn reading(&self, id: &str) -> Option<&ReadingDef> {
        self.readings.iter().find(|r| r.id == id)
    }
}
