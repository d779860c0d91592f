use buildings_fmu::{BuildingId, Registry, RegistryError, ZoneRequest};

fn zone_names(registry: &Registry, building: &str) -> Vec<String> {
    registry
        .building_by_name(building)
        .map(|b| b.zone_names().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn test_two_buildings_three_zones() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    let a1 = registry.create_zone(ZoneRequest::new("bldgA", "zone1", 2))?;
    let a2 = registry.create_zone(ZoneRequest::new("bldgA", "zone2", 3))?;
    let b1 = registry.create_zone(ZoneRequest::new("bldgB", "zone1", 1))?;

    assert_eq!(registry.num_buildings(), 2);
    assert_eq!(zone_names(&registry, "bldgA"), vec!["zone1", "zone2"]);
    assert_eq!(zone_names(&registry, "bldgB"), vec!["zone1"]);

    assert_eq!(a1.building, a2.building);
    assert_ne!(a1.building, b1.building);
    assert_eq!(registry.zone(a2).unwrap().value_references(), &[0, 1, 2]);
    assert_eq!(registry.zone(b1).unwrap().parent, Some(BuildingId(1)));
    Ok(())
}

#[test]
fn test_duplicate_zone_leaves_registry_unchanged() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.create_zone(ZoneRequest::new("bldgA", "zone1", 2))?;

    let err = registry
        .create_zone(ZoneRequest::new("bldgA", "zone1", 2))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateZoneDeclaration {
            zone: "zone1".to_string(),
            building: "bldgA".to_string(),
        }
    );
    assert_eq!(registry.num_buildings(), 1);
    assert_eq!(registry.num_zones(), 1);
    Ok(())
}

#[test]
fn test_same_zone_name_in_different_buildings() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    for bld in ["bldgA", "bldgB", "bldgC"] {
        registry.create_zone(ZoneRequest::new(bld, "Core_ZN", 1))?;
    }
    assert_eq!(registry.num_buildings(), 3);
    assert_eq!(registry.num_zones(), 3);
    Ok(())
}

#[test]
fn test_interleaved_declarations_keep_first_seen_order() -> anyhow::Result<()> {
    let declarations = [
        ("east", "z3"),
        ("west", "z1"),
        ("east", "z1"),
        ("west", "z2"),
        ("east", "z2"),
    ];
    let mut registry = Registry::new();
    for (bld, zone) in declarations {
        registry.create_zone(ZoneRequest::new(bld, zone, 0))?;
    }

    let names: Vec<&str> = registry.buildings().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["east", "west"]);
    assert_eq!(zone_names(&registry, "east"), vec!["z3", "z1", "z2"]);
    assert_eq!(zone_names(&registry, "west"), vec!["z1", "z2"]);

    for (bld, zone) in declarations {
        let handle = registry.find_zone(bld, zone).unwrap();
        assert_eq!(registry.zone(handle).unwrap().name, zone);
    }
    Ok(())
}

#[test]
fn test_building_names_are_case_sensitive() -> anyhow::Result<()> {
    let mut registry = Registry::new();
    registry.create_zone(ZoneRequest::new("Bldg", "zone1", 1))?;
    registry.create_zone(ZoneRequest::new("bldg", "zone1", 1))?;
    assert_eq!(registry.num_buildings(), 2);
    Ok(())
}
