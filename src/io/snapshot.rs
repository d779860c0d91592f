//! JSON snapshot of a registry.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::UID;
use crate::registry::{Building, Registry};

/// Serializable view of a registry: its session UID and every building with
/// its zones, in registration order.
#[derive(Debug, Serialize)]
pub struct RegistrySnapshot<'a> {
    pub session: &'a UID,
    pub buildings: &'a [Building],
}

impl<'a> From<&'a Registry> for RegistrySnapshot<'a> {
    fn from(registry: &'a Registry) -> Self {
        Self {
            session: &registry.uid,
            buildings: registry.buildings(),
        }
    }
}

/// Writes a registry snapshot to a JSON file.
pub fn write_snapshot(path: &Path, registry: &Registry) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, &RegistrySnapshot::from(registry))
        .with_context(|| format!("Failed to serialize registry to: {}", path.display()))?;

    Ok(())
}

/// Serializes a registry snapshot to a JSON string.
pub fn to_snapshot_string(registry: &Registry) -> Result<String> {
    serde_json::to_string_pretty(&RegistrySnapshot::from(registry))
        .context("Failed to serialize registry to string")
}
