//! Zone record - one thermal zone of an EnergyPlus building.
//!
//! Hierarchy: Registry → Building → Zone

use serde::{Deserialize, Serialize};

use super::{BuildingId, ZoneRequest};
use crate::HasName;
use crate::UID;
use crate::error::{RegistryError, Result, try_grow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub uid: UID,
    /// Building this zone is attached to. `None` until registered.
    pub parent: Option<BuildingId>,
    value_references: Vec<u32>,
    sensor_variables: Vec<String>,
    recorder_variables: Vec<String>,
    recorder_value_references: Vec<i32>,
}

impl HasName for Zone {
    fn get_name(&self) -> &str {
        &self.name
    }
}

impl Zone {
    /// Creates a detached zone with one value reference per fluid port.
    ///
    /// Value references are placeholders `0..fluid_ports` until the real ones
    /// from the FMU model description are installed with
    /// [`Zone::set_value_references`].
    pub fn new(name: &str, fluid_ports: usize) -> Result<Self> {
        let n = u32::try_from(fluid_ports).map_err(|_| RegistryError::InvalidArgument {
            what: "fluid ports",
            reason: format!("{fluid_ports} exceeds the value reference range"),
        })?;
        let mut value_references: Vec<u32> = Vec::new();
        try_grow(&mut value_references, fluid_ports, "zone value references")?;
        value_references.extend(0..n);

        Ok(Self {
            name: name.to_string(),
            uid: UID::new(),
            parent: None,
            value_references,
            sensor_variables: Vec::new(),
            recorder_variables: Vec::new(),
            recorder_value_references: Vec::new(),
        })
    }

    /// Creates a detached zone from a host request.
    pub fn from_request(request: ZoneRequest) -> Result<Self> {
        let mut zone = Self::new(&request.zone_name, request.fluid_ports)?;
        zone.sensor_variables = request.sensor_variables;
        zone.recorder_variables = request.recorder_variables;
        zone.recorder_value_references = request.recorder_value_references;
        Ok(zone)
    }

    pub fn num_fluid_ports(&self) -> usize {
        self.value_references.len()
    }

    pub fn value_references(&self) -> &[u32] {
        &self.value_references
    }

    /// Replaces the placeholder value references.
    ///
    /// The number of references is fixed by the fluid port count.
    pub fn set_value_references(&mut self, value_references: Vec<u32>) -> Result<()> {
        if value_references.len() != self.value_references.len() {
            return Err(RegistryError::InvalidArgument {
                what: "value references",
                reason: format!(
                    "zone {} has {} fluid ports, got {} value references",
                    self.name,
                    self.value_references.len(),
                    value_references.len()
                ),
            });
        }
        self.value_references = value_references;
        Ok(())
    }

    pub fn sensor_variables(&self) -> &[String] {
        &self.sensor_variables
    }

    pub fn recorder_variables(&self) -> &[String] {
        &self.recorder_variables
    }

    pub fn recorder_value_references(&self) -> &[i32] {
        &self.recorder_value_references
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_value_references() -> Result<()> {
        let zone = Zone::new("Core", 4)?;
        assert_eq!(zone.value_references(), &[0, 1, 2, 3]);
        assert_eq!(zone.num_fluid_ports(), 4);
        assert!(zone.parent.is_none());
        Ok(())
    }

    #[test]
    fn test_zero_ports() -> Result<()> {
        let zone = Zone::new("Attic", 0)?;
        assert!(zone.value_references().is_empty());
        Ok(())
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_port_count_beyond_value_reference_range() {
        let ports = u32::MAX as usize + 1;
        let err = Zone::new("Core", ports).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument { what: "fluid ports", .. }));
    }

    #[test]
    fn test_set_value_references_checks_length() -> Result<()> {
        let mut zone = Zone::new("Core", 2)?;
        assert!(zone.set_value_references(vec![10]).is_err());
        assert_eq!(zone.value_references(), &[0, 1]);
        zone.set_value_references(vec![10, 11])?;
        assert_eq!(zone.value_references(), &[10, 11]);
        Ok(())
    }

    #[test]
    fn test_from_request_keeps_variables() -> Result<()> {
        let req = ZoneRequest::new("bldg", "Core", 1)
            .with_sensors(["TAir", "relHum"])
            .with_recorders(["QConSen"], vec![3]);
        let zone = Zone::from_request(req)?;
        assert_eq!(zone.name, "Core");
        assert_eq!(zone.sensor_variables(), &["TAir".to_string(), "relHum".to_string()]);
        assert_eq!(zone.recorder_variables(), &["QConSen".to_string()]);
        assert_eq!(zone.recorder_value_references(), &[3]);
        Ok(())
    }
}
