//! Registry of EnergyPlus buildings and their zones.
//!
//! Every Modelica zone model constructs one zone object. Zones that name the
//! same EnergyPlus FMU instance share one [`Building`] record, which is created
//! on first reference and grows as further zones are declared.
//!
//! # Ownership
//!
//! The [`Registry`] owns its buildings, and each building owns its zones.
//! Buildings and zones are addressed by position ([`BuildingId`],
//! [`ZoneHandle`]); the registry is append-only, so a handle stays valid for
//! the lifetime of the registry. A zone refers back to its building through
//! [`Zone::parent`].
//!
//! # Thread safety
//!
//! Mutation requires `&mut Registry`. Hosts that construct models from
//! several threads must wrap the registry in their own lock.

mod building;
mod request;
mod zone;

pub use building::Building;
pub use request::ZoneRequest;
pub use zone::Zone;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result, try_grow};
use crate::host::{HostDiagnostics, TracingHost};
use crate::name::validate_name;
use crate::{FindByName, UID};

/// Position of a building in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub usize);

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "building #{}", self.0)
    }
}

/// Stable address of a zone: its building and its position in that building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneHandle {
    pub building: BuildingId,
    pub index: usize,
}

impl fmt::Display for ZoneHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zone #{} of {}", self.index, self.building)
    }
}

/// One model-construction session.
pub struct Registry {
    pub uid: UID,
    config: RegistryConfig,
    buildings: Vec<Building>,
    host: Box<dyn HostDiagnostics>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("uid", &self.uid)
            .field("config", &self.config)
            .field("buildings", &self.buildings)
            .finish_non_exhaustive()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::new())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            uid: UID::new(),
            buildings: Vec::with_capacity(config.initial_building_capacity),
            config,
            host: Box::new(TracingHost),
        }
    }

    /// Replaces the diagnostics receiver (default: [`TracingHost`]).
    pub fn with_host<H: HostDiagnostics + 'static>(mut self, host: H) -> Self {
        self.host = Box::new(host);
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the building for `building_name`, creating it around `zone` if
    /// it does not exist yet.
    ///
    /// `zone` is only attached when a new building is created; attaching
    /// further zones to an existing building goes through
    /// [`Registry::create_zone`].
    pub fn create_or_get_building(
        &mut self,
        building_name: &str,
        zone_name: &str,
        zone: Zone,
    ) -> Result<BuildingId> {
        validate_name("FMU instance", building_name)?;
        validate_name("zone", zone_name)?;
        if zone.name != zone_name {
            return Err(RegistryError::ZoneNameMismatch {
                expected: zone_name.to_string(),
                found: zone.name,
            });
        }

        if let Some(pos) = self.buildings.position_by_name(building_name) {
            return Ok(BuildingId(pos));
        }

        try_grow(&mut self.buildings, 1, "building registry")?;
        let id = BuildingId(self.buildings.len());
        let building = Building::new(building_name, id, zone, self.config.initial_zone_capacity)?;
        tracing::debug!(
            building = building_name,
            uid = building.uid.short(),
            %id,
            "Created building for EnergyPlus FMU instance"
        );
        self.buildings.push(building);
        Ok(id)
    }

    /// Returns `false` iff the building already has a zone with exactly this
    /// name. Unknown buildings have no zones, so every name is unique there.
    pub fn is_zone_name_unique(&self, building: BuildingId, zone_name: &str) -> bool {
        self.building(building)
            .is_none_or(|b| b.is_zone_name_unique(zone_name))
    }

    /// Registers one zone and returns its handle.
    ///
    /// The zone is attached to the building named `request.fmu_name`, which
    /// is created if needed. Declaring the same zone twice for one building
    /// fails with [`RegistryError::DuplicateZoneDeclaration`] and leaves the
    /// registry unchanged.
    pub fn create_zone(&mut self, request: ZoneRequest) -> Result<ZoneHandle> {
        validate_name("FMU instance", &request.fmu_name)?;
        validate_name("zone", &request.zone_name)?;

        if self.config.announce_zones {
            let text = format!(
                "****** Initializing zone {}, fmu = {}, nFluPor = {} ******",
                request.zone_name, request.fmu_name, request.fluid_ports
            );
            self.host.message(&text);
        }

        let fmu_name = request.fmu_name.clone();
        let zone_name = request.zone_name.clone();
        let zone = Zone::from_request(request)?;

        match self.buildings.position_by_name(&fmu_name) {
            Some(pos) => {
                let index = self.buildings[pos].add_zone(zone)?;
                Ok(ZoneHandle {
                    building: BuildingId(pos),
                    index,
                })
            }
            None => {
                let building = self.create_or_get_building(&fmu_name, &zone_name, zone)?;
                Ok(ZoneHandle { building, index: 0 })
            }
        }
    }

    /// Hands a fatal error to the host diagnostics.
    pub fn report(&mut self, err: &RegistryError) {
        self.host.error(&err.to_string());
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(id.0)
    }

    pub fn building_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings.position_by_name(name).map(|i| &self.buildings[i])
    }

    pub fn zone(&self, handle: ZoneHandle) -> Option<&Zone> {
        self.building(handle.building)?.zone(handle.index)
    }

    pub fn zone_mut(&mut self, handle: ZoneHandle) -> Result<&mut Zone> {
        self.buildings
            .get_mut(handle.building.0)
            .and_then(|b| b.zone_mut(handle.index))
            .ok_or(RegistryError::UnknownZone(handle))
    }

    /// Looks up a zone by building and zone name.
    pub fn find_zone(&self, building_name: &str, zone_name: &str) -> Option<ZoneHandle> {
        let building = self.building_by_name(building_name)?;
        let index = building.zones().position_by_name(zone_name)?;
        Some(ZoneHandle {
            building: building.id(),
            index,
        })
    }

    pub fn zone_names(&self, id: BuildingId) -> Result<Vec<&str>> {
        self.building(id)
            .map(|b| b.zone_names())
            .ok_or(RegistryError::UnknownBuilding(id))
    }

    pub fn num_buildings(&self) -> usize {
        self.buildings.len()
    }

    pub fn num_zones(&self) -> usize {
        self.buildings.iter().map(|b| b.num_zones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}
