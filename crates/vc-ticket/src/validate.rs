//! Ticket validation logic.
//!
//! Structural checks only: identifiers and references. Whether the numbers
//! make a valid gauging is decided by the correction engine.

use crate::schema::{MovementDef, Ticket};
use std::collections::{HashMap, HashSet};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_ticket(ticket: &Ticket) -> Result<(), ValidationError> {
    if ticket.version == 0 || ticket.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: ticket.version,
        });
    }

    let mut tank_ids = HashSet::new();
    for tank in &ticket.tanks {
        if !tank_ids.insert(tank.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: tank.id.clone(),
                context: "tanks".to_string(),
            });
        }
    }

    let mut reading_tanks = HashMap::new();
    for reading in &ticket.readings {
        if reading_tanks
            .insert(reading.id.as_str(), reading.tank_id.as_str())
            .is_some()
        {
            return Err(ValidationError::DuplicateId {
                id: reading.id.clone(),
                context: "readings".to_string(),
            });
        }
        if !tank_ids.contains(reading.tank_id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: reading.tank_id.clone(),
                context: format!("reading '{}' tank_id", reading.id),
            });
        }
    }

    let mut movement_ids = HashSet::new();
    for movement in &ticket.movements {
        if !movement_ids.insert(movement.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: movement.id.clone(),
                context: "movements".to_string(),
            });
        }
        validate_movement(movement, &reading_tanks)?;
    }

    Ok(())
}

fn validate_movement(
    movement: &MovementDef,
    reading_tanks: &HashMap<&str, &str>,
) -> Result<(), ValidationError> {
    let tank_of = |reading_id: &str, role: &str| {
        reading_tanks
            .get(reading_id)
            .copied()
            .ok_or_else(|| ValidationError::MissingReference {
                id: reading_id.to_string(),
                context: format!("movement '{}' {role}", movement.id),
            })
    };

    let opening_tank = tank_of(&movement.opening_reading_id, "opening_reading_id")?;
    let closing_tank = tank_of(&movement.closing_reading_id, "closing_reading_id")?;

    if movement.opening_reading_id == movement.closing_reading_id {
        return Err(ValidationError::InvalidValue {
            field: format!("movement '{}' closing_reading_id", movement.id),
            value: movement.closing_reading_id.clone(),
            reason: "opening and closing readings must differ".to_string(),
        });
    }

    if opening_tank != closing_tank {
        return Err(ValidationError::InvalidValue {
            field: format!("movement '{}' closing_reading_id", movement.id),
            value: movement.closing_reading_id.clone(),
            reason: format!(
                "closing reading is on tank '{closing_tank}', opening on '{opening_tank}'"
            ),
        });
    }

    Ok(())
}
