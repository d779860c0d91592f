//! Zone manifest I/O.
//!
//! A manifest lists the zone declarations of a model in the order the host
//! would construct them, together with an optional registry configuration:
//!
//! ```json
//! {
//!   "config": { "announce_zones": false },
//!   "zones": [
//!     { "fmu_name": "bldgA", "zone_name": "Core", "fluid_ports": 2 }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::registry::{Registry, ZoneRequest};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub config: RegistryConfig,
    pub zones: Vec<ZoneRequest>,
}

/// Reads a manifest from a JSON file.
pub fn read_manifest(path: &Path) -> Result<Manifest> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let manifest: Manifest = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to deserialize manifest from: {}", path.display()))?;

    Ok(manifest)
}

/// Deserializes a manifest from a JSON string.
pub fn from_manifest_string(json: &str) -> Result<Manifest> {
    serde_json::from_str(json).context("Failed to deserialize manifest from string")
}

impl Registry {
    /// Builds a registry by replaying the manifest's zone declarations in order.
    ///
    /// Stops at the first declaration that fails.
    pub fn from_manifest(manifest: Manifest) -> Result<Self, RegistryError> {
        let mut registry = Registry::with_config(manifest.config);
        for request in manifest.zones {
            registry.create_zone(request)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_without_config() -> Result<()> {
        let json = r#"{"zones": [
            {"fmu_name": "bldgA", "zone_name": "zone1", "fluid_ports": 2},
            {"fmu_name": "bldgA", "zone_name": "zone2", "fluid_ports": 3}
        ]}"#;
        let manifest = from_manifest_string(json)?;
        assert_eq!(manifest.config, RegistryConfig::new());

        let registry = Registry::from_manifest(manifest)?;
        assert_eq!(registry.num_buildings(), 1);
        assert_eq!(registry.num_zones(), 2);
        Ok(())
    }

    #[test]
    fn test_manifest_stops_at_duplicate() -> Result<()> {
        let json = r#"{"zones": [
            {"fmu_name": "bldgA", "zone_name": "zone1", "fluid_ports": 1},
            {"fmu_name": "bldgA", "zone_name": "zone1", "fluid_ports": 1}
        ]}"#;
        let err = Registry::from_manifest(from_manifest_string(json)?).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateZoneDeclaration { .. }));
        Ok(())
    }

    #[test]
    fn test_malformed_manifest() {
        assert!(from_manifest_string(r#"{"zones": [{"fmu_name": "x"}]}"#).is_err());
    }
}
