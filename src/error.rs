//! Errors raised while registering buildings, zones and arrays.

use std::collections::TryReserveError;

use crate::registry::{BuildingId, ZoneHandle};

/// Errors that can occur while the host constructs its external objects.
///
/// `ResourceExhausted` and `DuplicateZoneDeclaration` are fatal for model
/// construction; the host decides whether to abort or report them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Not enough memory to allocate {site}")]
    ResourceExhausted { site: &'static str },

    #[error(
        "Modelica model specifies zone {zone} twice for the FMU {building}. \
         Each zone must only be specified once."
    )]
    DuplicateZoneDeclaration { zone: String, building: String },

    #[error("Invalid {what} name: {reason}")]
    InvalidName { what: &'static str, reason: String },

    #[error("Invalid argument {what}: {reason}")]
    InvalidArgument { what: &'static str, reason: String },

    #[error("Building not found: {0}")]
    UnknownBuilding(BuildingId),

    #[error("Zone not found: {0}")]
    UnknownZone(ZoneHandle),

    #[error("Zone name mismatch: expected {expected}, found {found}")]
    ZoneNameMismatch { expected: String, found: String },
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Grows `values` by `additional` slots, reporting failure instead of aborting.
pub(crate) fn try_grow<T>(
    values: &mut Vec<T>,
    additional: usize,
    site: &'static str,
) -> Result<()> {
    values
        .try_reserve(additional)
        .map_err(|_: TryReserveError| RegistryError::ResourceExhausted { site })
}
