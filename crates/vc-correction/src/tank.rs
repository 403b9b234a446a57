//! Tank metadata port.
//!
//! Roof constants belong to the tank, not to the reading, and are owned by a
//! separate tank-metadata service. The engine only sees it through
//! [`TankCatalog`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::roof::RoofConstants;

/// Calibration data of one tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankProfile {
    pub id: String,
    pub name: String,
    pub roof: RoofConstants,
}

/// Source of tank calibration data.
pub trait TankCatalog: Send + Sync {
    /// Look up a tank by identifier.
    fn tank(&self, id: &str) -> Option<&TankProfile>;
}

/// Catalog held in memory, e.g. built from a ticket file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTankCatalog {
    tanks: HashMap<String, TankProfile>,
}

impl InMemoryTankCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles(profiles: impl IntoIterator<Item = TankProfile>) -> Self {
        let mut catalog = Self::new();
        for profile in profiles {
            catalog.insert(profile);
        }
        catalog
    }

    /// Insert or replace a tank, returning the previous profile.
    pub fn insert(&mut self, profile: TankProfile) -> Option<TankProfile> {
        self.tanks.insert(profile.id.clone(), profile)
    }

    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }
}

impl TankCatalog for InMemoryTankCatalog {
    fn tank(&self, id: &str) -> Option<&TankProfile> {
        self.tanks.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, lamination: f64) -> TankProfile {
        TankProfile {
            id: id.into(),
            name: format!("Tank {id}"),
            roof: RoofConstants::fixed_roof(lamination),
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = InMemoryTankCatalog::from_profiles([profile("T1", 60.0), profile("T2", 75.0)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tank("T2").unwrap().roof.lamination_temp_f, 75.0);
        assert!(catalog.tank("T3").is_none());
    }

    #[test]
    fn insert_replaces_existing_profile() {
        let mut catalog = InMemoryTankCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.insert(profile("T1", 60.0)).is_none());
        let previous = catalog.insert(profile("T1", 70.0)).unwrap();
        assert_eq!(previous.roof.lamination_temp_f, 60.0);
        assert_eq!(catalog.tank("T1").unwrap().roof.lamination_temp_f, 70.0);
    }
}
