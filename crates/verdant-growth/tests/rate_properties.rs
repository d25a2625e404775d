//! End-to-end checks of profile inheritance feeding rate resolution.

use verdant_growth::{
    BiomeAliasTable, GrowthCategory, GrowthProfile, ProfileOverrides, ProfileSet, resolve,
    resolve_base,
};
use verdant_world::{Biome, BlockPos, GridWorld, Material, WorldQuery};

fn aliases() -> BiomeAliasTable {
    [
        ("grasslands", vec![Biome::Plains, Biome::Savanna, Biome::SavannaPlateau]),
        ("rivers", vec![Biome::River, Biome::FrozenRiver]),
    ]
    .into_iter()
    .collect()
}

fn farm() -> GridWorld {
    let mut world = GridWorld::new(0, 127, Biome::Plains);
    for x in -8..=8 {
        for z in -8..=8 {
            world.fill_down(BlockPos::new(x, 63, z), 63, Material::Dirt);
        }
    }
    world
}

fn crops_profile() -> GrowthProfile {
    let root = GrowthProfile::make_default("crops", GrowthCategory::Plant);
    GrowthProfile::make_child(
        "crops",
        &root,
        &ProfileOverrides {
            base_rate: Some(0.4),
            needs_sunlight: Some(true),
            biomes: Some(vec![
                ("grasslands".to_string(), 0.5),
                ("PLAINS".to_string(), 1.0),
            ]),
            ..Default::default()
        },
        &aliases(),
    )
    .value
}

#[test]
fn alias_section_expands_to_three_entries() {
    let root = GrowthProfile::make_default("flowers", GrowthCategory::Plant);
    let profile = GrowthProfile::make_child(
        "flowers",
        &root,
        &ProfileOverrides {
            biomes: Some(vec![("grasslands".to_string(), 0.4)]),
            ..Default::default()
        },
        &aliases(),
    );
    assert!(profile.is_clean());
    let multipliers = profile.value.biome_multipliers();
    assert_eq!(multipliers.len(), 3);
    assert!(multipliers.iter().all(|(_, m)| m == 0.4));
}

#[test]
fn zero_outside_configured_biomes_for_every_growing_category() {
    let world = farm();
    let pos = BlockPos::new(0, 64, 0);
    for category in [
        GrowthCategory::Plant,
        GrowthCategory::Tree,
        GrowthCategory::Column,
        GrowthCategory::Entity,
    ] {
        let root = GrowthProfile::make_default("root", category);
        let profile = GrowthProfile::make_child(
            "desert only",
            &root,
            &ProfileOverrides {
                greenhouse_rate: Some(10.0),
                soil_material: Some("DIRT".to_string()),
                soil_max_layers: Some(4),
                soil_bonus_per_layer: Some(1.0),
                biomes: Some(vec![("DESERT".to_string(), 1.0)]),
                ..Default::default()
            },
            &aliases(),
        )
        .value;
        assert_eq!(resolve(&profile, &world, pos), 0.0);
    }
}

#[test]
fn fishing_drop_is_base_times_biome() {
    let root = GrowthProfile::make_default("fish", GrowthCategory::FishingDrop);
    let profile = GrowthProfile::make_child(
        "salmon",
        &root,
        &ProfileOverrides {
            base_rate: Some(0.3),
            biomes: Some(vec![("rivers".to_string(), 2.0)]),
            ..Default::default()
        },
        &aliases(),
    )
    .value;

    let mut world = GridWorld::new(0, 127, Biome::Ocean);
    world.set_biome(3, 3, Biome::FrozenRiver);
    let river = BlockPos::new(3, 62, 3);
    let ocean = BlockPos::new(0, 62, 0);

    assert_eq!(resolve(&profile, &world, river), 0.3 * 2.0);
    assert_eq!(resolve(&profile, &world, ocean), 0.0);
    assert_eq!(resolve_base(&profile, &world, river), resolve(&profile, &world, river));
}

#[test]
fn inherited_profiles_resolve_independently() {
    let crops = crops_profile();
    let wheat = GrowthProfile::make_child(
        "wheat",
        &crops,
        &ProfileOverrides {
            base_rate: Some(0.2),
            biomes: Some(vec![("SAVANNA".to_string(), 0.1)]),
            ..Default::default()
        },
        &aliases(),
    )
    .value;

    let mut world = farm();
    world.set_biome(5, 0, Biome::Savanna);
    let plains = BlockPos::new(0, 64, 0);
    let savanna = BlockPos::new(5, 64, 0);

    // Later keys overwrite alias assignments: PLAINS 1.0, SAVANNA 0.5 on the parent.
    assert!((resolve(&crops, &world, plains) - 0.4).abs() < 1e-12);
    assert!((resolve(&crops, &world, savanna) - 0.2).abs() < 1e-12);

    assert!((resolve(&wheat, &world, plains) - 0.2).abs() < 1e-12);
    assert!((resolve(&wheat, &world, savanna) - 0.02).abs() < 1e-12);
    assert_eq!(crops.biome_multiplier(Biome::Savanna), Some(0.5));
}

#[test]
fn profile_set_lookup_feeds_resolution() {
    let mut set = ProfileSet::new();
    set.insert(crops_profile());
    let world = farm();
    let profile = set.get("CROPS").unwrap();
    let pos = BlockPos::new(0, 64, 0);
    assert_eq!(world.biome_at(pos), Biome::Plains);
    assert!((resolve(profile.as_ref(), &world, pos) - 0.4).abs() < 1e-12);
}
