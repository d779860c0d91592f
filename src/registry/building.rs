//! Building record - one EnergyPlus FMU instance and its zones.

use serde::{Deserialize, Serialize};

use super::{BuildingId, Zone};
use crate::error::{RegistryError, Result, try_grow};
use crate::{FindByName, HasName, UID};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub uid: UID,
    id: BuildingId,
    zones: Vec<Zone>,
}

impl HasName for Building {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Building {
    /// Creates a building seeded with its first zone.
    pub(crate) fn new(name: &str, id: BuildingId, zone: Zone, zone_capacity: usize) -> Result<Self> {
        let mut zones: Vec<Zone> = Vec::new();
        try_grow(&mut zones, zone_capacity.max(1), "building zone list")?;

        let mut building = Self {
            name: name.to_string(),
            uid: UID::new(),
            id,
            zones,
        };
        building.push_zone(zone);
        Ok(building)
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    /// Returns zones in the order they were first requested.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub(crate) fn zone_mut(&mut self, index: usize) -> Option<&mut Zone> {
        self.zones.get_mut(index)
    }

    pub fn zone_by_name(&self, name: &str) -> Option<&Zone> {
        self.zones.position_by_name(name).map(|i| &self.zones[i])
    }

    pub fn zone_names(&self) -> Vec<&str> {
        self.zones.iter().map(|z| z.name.as_str()).collect()
    }

    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    /// Returns `false` if a zone with exactly this name is already attached.
    pub fn is_zone_name_unique(&self, zone_name: &str) -> bool {
        !self.zones.contains_name(zone_name)
    }

    /// Attaches a zone and returns its index within the building.
    ///
    /// The zone list is left untouched when the name is taken or the list
    /// cannot grow.
    pub(crate) fn add_zone(&mut self, zone: Zone) -> Result<usize> {
        if !self.is_zone_name_unique(&zone.name) {
            return Err(RegistryError::DuplicateZoneDeclaration {
                zone: zone.name,
                building: self.name.clone(),
            });
        }
        try_grow(&mut self.zones, 1, "building zone list")?;
        Ok(self.push_zone(zone))
    }

    fn push_zone(&mut self, mut zone: Zone) -> usize {
        zone.parent = Some(self.id);
        self.zones.push(zone);
        self.zones.len() - 1
    }
}
