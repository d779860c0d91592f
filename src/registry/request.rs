use serde::{Deserialize, Serialize};

/// Everything the host passes when it constructs one zone object.
///
/// Sensor and recorder variables are stored on the zone as given; the
/// co-simulation stepper interprets them later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRequest {
    /// Name of the EnergyPlus FMU instance the zone belongs to.
    pub fmu_name: String,
    pub zone_name: String,
    /// Number of fluid ports connected to the zone air volume.
    pub fluid_ports: usize,
    #[serde(default)]
    pub sensor_variables: Vec<String>,
    #[serde(default)]
    pub recorder_variables: Vec<String>,
    #[serde(default)]
    pub recorder_value_references: Vec<i32>,
}

impl ZoneRequest {
    pub fn new(fmu_name: &str, zone_name: &str, fluid_ports: usize) -> Self {
        Self {
            fmu_name: fmu_name.to_string(),
            zone_name: zone_name.to_string(),
            fluid_ports,
            sensor_variables: Vec::new(),
            recorder_variables: Vec::new(),
            recorder_value_references: Vec::new(),
        }
    }

    pub fn with_sensors<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.sensor_variables = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_recorders<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
        value_references: Vec<i32>,
    ) -> Self {
        self.recorder_variables = names.into_iter().map(Into::into).collect();
        self.recorder_value_references = value_references;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_request() -> anyhow::Result<()> {
        let req: ZoneRequest =
            serde_json::from_str(r#"{"fmu_name": "bldg", "zone_name": "Core", "fluid_ports": 2}"#)?;
        assert_eq!(req, ZoneRequest::new("bldg", "Core", 2));
        Ok(())
    }

    #[test]
    fn test_builder() {
        let req = ZoneRequest::new("bldg", "Core", 0)
            .with_sensors(["TAir"])
            .with_recorders(vec!["QSen".to_string(), "QLat".to_string()], vec![7, 8]);
        assert_eq!(req.sensor_variables, vec!["TAir".to_string()]);
        assert_eq!(req.recorder_variables.len(), 2);
        assert_eq!(req.recorder_value_references, vec![7, 8]);
    }
}
