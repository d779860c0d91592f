use serde::{Deserialize, Serialize};

/// Configuration for a registry session.
///
/// Can be embedded in a manifest under the `config` key; missing fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Number of building slots reserved up front.
    ///
    /// Models rarely couple to more than a handful of EnergyPlus instances.
    pub initial_building_capacity: usize,
    /// Number of zone slots reserved when a building is created.
    pub initial_zone_capacity: usize,
    /// Emit an informational diagnostic for every zone that is initialized.
    pub announce_zones: bool,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self {
            initial_building_capacity: 4,
            initial_zone_capacity: 1,
            announce_zones: true,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
