//! Ticket loading, saving, validation, and introspection.

use std::path::Path;

use tracing::debug;
use vc_correction::CrudeClass;
use vc_ticket::Ticket;

use crate::error::{AppError, AppResult};
use crate::settle::{reading_from_def, tank_profile};

/// Summary of a reading for listing.
#[derive(Debug, Clone)]
pub struct ReadingSummary {
    pub id: String,
    pub tank_id: String,
    pub tank_name: String,
    pub classification: String,
    pub tov: f64,
    pub water_tov: f64,
    pub api60: f64,
    pub liquid_temp_f: f64,
}

enum TicketFormat {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> AppResult<TicketFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(TicketFormat::Yaml),
        Some("json") => Ok(TicketFormat::Json),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load a ticket from a YAML or JSON file, chosen by extension.
pub fn load_ticket(path: &Path) -> AppResult<Ticket> {
    let format = format_of(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::TicketFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let ticket: Ticket = match format {
        TicketFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Ticket(format!("Failed to parse ticket YAML: {}", e)))?,
        TicketFormat::Json => serde_json::from_str(&content)
            .map_err(|e| AppError::Ticket(format!("Failed to parse ticket JSON: {}", e)))?,
    };

    debug!(
        path = %path.display(),
        readings = ticket.readings.len(),
        movements = ticket.movements.len(),
        "ticket loaded"
    );
    Ok(ticket)
}

/// Save a ticket, choosing YAML or JSON by extension.
pub fn save_ticket(path: &Path, ticket: &Ticket) -> AppResult<()> {
    let content = match format_of(path)? {
        TicketFormat::Yaml => serde_yaml::to_string(ticket)
            .map_err(|e| AppError::Ticket(format!("Failed to serialize ticket: {}", e)))?,
        TicketFormat::Json => serde_json::to_string_pretty(ticket)
            .map_err(|e| AppError::Ticket(format!("Failed to serialize ticket: {}", e)))?,
    };

    std::fs::write(path, content).map_err(|e| AppError::TicketFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate ticket structure, then every reading's measurement preconditions.
///
/// A ticket that passes can still fail to settle on a gravity outside its
/// class's density bands.
pub fn validate_ticket(ticket: &Ticket) -> AppResult<()> {
    vc_ticket::validate_ticket(ticket)?;

    for tank in &ticket.tanks {
        tank_profile(tank)
            .roof
            .validate()
            .map_err(|e| AppError::Validation(format!("Tank '{}': {}", tank.id, e)))?;
    }

    for def in &ticket.readings {
        let reading = reading_from_def(def)?;
        reading
            .validate()
            .map_err(|e| AppError::for_reading(&def.id, e))?;
    }

    Ok(())
}

/// List readings in ticket order.
pub fn list_readings(ticket: &Ticket) -> Vec<ReadingSummary> {
    ticket
        .readings
        .iter()
        .map(|r| ReadingSummary {
            id: r.id.clone(),
            tank_id: r.tank_id.clone(),
            tank_name: ticket
                .tank(&r.tank_id)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            classification: r
                .classification
                .parse::<CrudeClass>()
                .map(|c| c.code().to_string())
                .unwrap_or_else(|_| r.classification.clone()),
            tov: r.tov,
            water_tov: r.water_tov,
            api60: r.api60,
            liquid_temp_f: r.liquid_temp_f,
        })
        .collect()
}
