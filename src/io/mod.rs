//! Input/Output for zone manifests and registry snapshots (JSON).

pub mod manifest;
pub mod snapshot;

pub use manifest::{Manifest, from_manifest_string, read_manifest};
pub use snapshot::{RegistrySnapshot, to_snapshot_string, write_snapshot};
