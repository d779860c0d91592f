use crate::error::{RegistryError, Result};

/// Types that expose a comparable name.
pub trait HasName {
    fn get_name(&self) -> &str;
}

/// Exact-name lookup over slices of `T: HasName`.
///
/// Comparison is case-sensitive and byte-exact. Lookups are linear scans;
/// the number of buildings per model and zones per building is small.
pub trait FindByName {
    /// Position of the first item whose name equals `name`.
    fn position_by_name(&self, name: &str) -> Option<usize>;

    fn contains_name(&self, name: &str) -> bool {
        self.position_by_name(name).is_some()
    }
}

impl<T: HasName> FindByName for [T] {
    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.iter().position(|item| item.get_name() == name)
    }
}

/// Checks that a name can be used as a building or zone identifier.
///
/// Names must be non-empty and must not contain NUL, since they are handed
/// back to the host as C strings.
pub fn validate_name(what: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RegistryError::InvalidName {
            what,
            reason: "name is empty".to_string(),
        });
    }
    if name.contains('\0') {
        return Err(RegistryError::InvalidName {
            what,
            reason: format!("name contains a NUL byte: {:?}", name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);
    impl HasName for Named {
        fn get_name(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_position_by_name_is_exact() {
        let items = vec![
            Named("Core".to_string()),
            Named("core".to_string()),
            Named("Perimeter".to_string()),
        ];
        assert_eq!(items.position_by_name("core"), Some(1));
        assert_eq!(items.position_by_name("Core"), Some(0));
        assert_eq!(items.position_by_name("Core "), None);
        assert!(!items.contains_name("perimeter"));
    }

    #[test]
    fn test_empty_slice() {
        let items: Vec<Named> = Vec::new();
        assert!(!items.contains_name("anything"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("zone", "Core_ZN").is_ok());
        assert!(matches!(
            validate_name("zone", ""),
            Err(RegistryError::InvalidName { what: "zone", .. })
        ));
        assert!(validate_name("FMU instance", "a\0b").is_err());
    }
}
