//! Host-side bookkeeping for coupling Modelica models to EnergyPlus FMUs.
//!
//! Each Modelica zone model constructs a zone external object. Zones that
//! name the same EnergyPlus FMU instance share one building record in a
//! [`Registry`]. The crate also provides a growable array external object and
//! the C ABI the Modelica tool links against ([`ffi`]).

pub mod array;
pub mod config;
pub mod error;
pub mod ffi;
pub mod host;
pub mod io;
mod name;
pub mod registry;
mod uid;

// Prelude
pub use array::GrowableArray;
pub use config::RegistryConfig;
pub use error::RegistryError;
pub use host::{HostDiagnostics, RecordingHost, TracingHost};
pub use name::{FindByName, HasName};
pub use registry::{Building, BuildingId, Registry, Zone, ZoneHandle, ZoneRequest};
pub use uid::UID;
