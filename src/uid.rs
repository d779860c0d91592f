use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Random identifier attached to registries, buildings and zones.
///
/// Names identify records for the host; the UID tags log lines and snapshots
/// so that records from different registry sessions can be told apart.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First block of the UID, enough to tell records apart in logs.
    pub fn short(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uids_differ() {
        assert_ne!(UID::new(), UID::new());
    }

    #[test]
    fn test_short() {
        let uid = UID::from("1b4e28ba-2fa1-11d2-883f-0016d3cca427");
        assert_eq!(uid.short(), "1b4e28ba");
        assert_eq!(UID::from("plain").short(), "plain");
    }
}
