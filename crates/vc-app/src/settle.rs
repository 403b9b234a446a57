//! Ticket settlement: correct every reading, then every movement.

use std::collections::HashMap;

use tracing::debug;
use vc_correction::{
    CorrectionEngine, CrudeClass, ENGINE_VERSION, InMemoryTankCatalog, MovementDelta, Reading,
    RoofConstants, Settlement, TankCatalog, TankProfile, bsw_from_parts,
};
use vc_ticket::{ReadingDef, TankDef, Ticket};

use crate::error::{AppError, AppResult};
use crate::fingerprint::ticket_fingerprint;
use crate::report::{MovementReport, ReadingReport, SettlementReport};

pub fn tank_profile(def: &TankDef) -> TankProfile {
    TankProfile {
        id: def.id.clone(),
        name: def.name.clone(),
        roof: RoofConstants::new(def.kfra1, def.kfra2, def.lamination_temp_f),
    }
}

/// Build the tank catalog the engine resolves roof constants from.
pub fn build_tank_catalog(ticket: &Ticket) -> InMemoryTankCatalog {
    InMemoryTankCatalog::from_profiles(ticket.tanks.iter().map(tank_profile))
}

/// Map a ticket reading onto the engine's input.
pub fn reading_from_def(def: &ReadingDef) -> AppResult<Reading> {
    let classification: CrudeClass = def
        .classification
        .parse()
        .map_err(|e| AppError::for_reading(&def.id, e))?;

    Ok(Reading {
        classification,
        gauge: def.gauge,
        tov: def.tov,
        water_gauge: def.water_gauge,
        water_tov: def.water_tov,
        liquid_temp_f: def.liquid_temp_f,
        ambient_temp_f: def.ambient_temp_f,
        api60: def.api60,
        bsw_percent: bsw_from_parts(def.water_percent, def.sediment_percent),
    })
}

pub fn settle_reading(
    engine: &CorrectionEngine,
    catalog: &dyn TankCatalog,
    def: &ReadingDef,
) -> AppResult<Settlement> {
    let reading = reading_from_def(def)?;
    let result = engine
        .compute_for_tank(catalog, &def.tank_id, &reading)
        .map_err(|e| AppError::for_reading(&def.id, e))?;
    Ok(Settlement { reading, result })
}

/// Settle a whole ticket.
///
/// Fails on the first reading the engine rejects; a partial report is never
/// produced.
pub fn settle_ticket(ticket: &Ticket, engine: &CorrectionEngine) -> AppResult<SettlementReport> {
    vc_ticket::validate_ticket(ticket)?;

    let catalog = build_tank_catalog(ticket);
    let mut settled: HashMap<&str, Settlement> = HashMap::new();
    let mut readings = Vec::with_capacity(ticket.readings.len());

    for def in &ticket.readings {
        let settlement = settle_reading(engine, &catalog, def)?;
        debug!(
            reading_id = %def.id,
            tank_id = %def.tank_id,
            gsv = settlement.result.gsv,
            nsv = settlement.result.nsv,
            "reading settled"
        );
        readings.push(ReadingReport {
            reading_id: def.id.clone(),
            tank_id: def.tank_id.clone(),
            classification: settlement.reading.classification,
            tov: settlement.reading.tov,
            water_tov: settlement.reading.water_tov,
            bsw_percent: settlement.reading.bsw_percent,
            result: settlement.result,
        });
        settled.insert(def.id.as_str(), settlement);
    }

    let lookup = |id: &str| {
        settled
            .get(id)
            .ok_or_else(|| AppError::ReadingNotFound(id.to_string()))
    };

    let mut movements = Vec::with_capacity(ticket.movements.len());
    for movement in &ticket.movements {
        let opening = lookup(&movement.opening_reading_id)?;
        let closing = lookup(&movement.closing_reading_id)?;
        let tank_id = ticket
            .reading(&movement.opening_reading_id)
            .map(|r| r.tank_id.clone())
            .ok_or_else(|| AppError::ReadingNotFound(movement.opening_reading_id.clone()))?;

        let delta = MovementDelta::between(opening, closing);
        debug!(
            movement_id = %movement.id,
            gsv = delta.gsv,
            nsv = delta.nsv,
            "movement settled"
        );
        movements.push(MovementReport {
            movement_id: movement.id.clone(),
            tank_id,
            opening_reading_id: movement.opening_reading_id.clone(),
            closing_reading_id: movement.closing_reading_id.clone(),
            delta,
        });
    }

    Ok(SettlementReport {
        ticket_name: ticket.name.clone(),
        load: ticket.load.clone(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        engine_version: ENGINE_VERSION.to_string(),
        input_fingerprint: ticket_fingerprint(ticket, ENGINE_VERSION)?,
        readings,
        movements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vc_correction::CorrectionError;

    fn reading_def() -> ReadingDef {
        ReadingDef {
            id: "r1".to_string(),
            tank_id: "T1".to_string(),
            classification: "a".to_string(),
            gauge: 1250.0,
            tov: 1000.0,
            water_gauge: 12.0,
            water_tov: 10.0,
            liquid_temp_f: 80.0,
            ambient_temp_f: 85.0,
            api60: 30.0,
            water_percent: 0.3,
            sediment_percent: 0.2,
        }
    }

    #[test]
    fn reading_def_maps_onto_engine_input() {
        let reading = reading_from_def(&reading_def()).unwrap();
        assert_eq!(reading.classification, CrudeClass::A);
        assert_eq!(reading.bsw_percent, 0.5);
        assert_eq!(reading.net_observed(), 990.0);
    }

    #[test]
    fn unknown_classification_names_the_reading() {
        let def = ReadingDef {
            classification: "C".to_string(),
            ..reading_def()
        };
        match reading_from_def(&def).unwrap_err() {
            AppError::Correction { reading_id, source } => {
                assert_eq!(reading_id, "r1");
                assert!(matches!(
                    source,
                    CorrectionError::InvalidCrudeClassification { .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_tank_is_reported() {
        let catalog = InMemoryTankCatalog::new();
        let err = settle_reading(&CorrectionEngine::new(), &catalog, &reading_def()).unwrap_err();
        match err {
            AppError::Correction { reading_id, source } => {
                assert_eq!(reading_id, "r1");
                assert_eq!(
                    source,
                    CorrectionError::UnknownTank {
                        tank_id: "T1".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tank_def_becomes_profile() {
        let profile = tank_profile(&TankDef {
            id: "T1".to_string(),
            name: "Tank".to_string(),
            kfra1: 35.0,
            kfra2: 0.8,
            lamination_temp_f: 75.0,
        });
        assert!(profile.roof.is_floating());
        assert_eq!(profile.roof.lamination_temp_f, 75.0);
    }
}
