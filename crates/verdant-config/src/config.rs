//! Growth configuration with RON persistence and profile-set construction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use verdant_growth::{
    BiomeAliasTable, GrowthCategory, GrowthProfile, ProfileOverrides, ProfileSet,
};
use verdant_world::Biome;

use crate::error::ConfigError;

/// File name of the growth configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "growth.ron";

/// Top-level growth configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GrowthConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Alias name -> biome names, usable as keys in a profile's `biomes`.
    pub biome_aliases: HashMap<String, Vec<String>>,
    /// Profiles in definition order. Parents must come before their children.
    pub profiles: Vec<ProfileEntry>,
}

/// One named profile in the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileEntry {
    /// Profile name.
    pub name: String,
    /// Category of a root profile. Children take their parent's category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GrowthCategory>,
    /// Name of an earlier profile to inherit from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Fields overridden on top of the parent (or the neutral default).
    pub overrides: ProfileOverrides,
}

impl ProfileEntry {
    fn root(name: &str, category: GrowthCategory, overrides: ProfileOverrides) -> Self {
        Self {
            name: name.to_string(),
            category: Some(category),
            parent: None,
            overrides,
        }
    }

    fn child(name: &str, parent: &str, overrides: ProfileOverrides) -> Self {
        Self {
            name: name.to_string(),
            category: None,
            parent: Some(parent.to_string()),
            overrides,
        }
    }
}

fn biomes(entries: &[(&str, f64)]) -> Option<Vec<(String, f64)>> {
    Some(entries.iter().map(|(k, v)| (k.to_string(), *v)).collect())
}

impl Default for GrowthConfig {
    fn default() -> Self {
        let biome_aliases = HashMap::from([
            (
                "grasslands".to_string(),
                vec!["PLAINS".to_string(), "SAVANNA".to_string(), "SAVANNA_PLATEAU".to_string()],
            ),
            (
                "forests".to_string(),
                vec![
                    "FOREST".to_string(),
                    "FOREST_HILLS".to_string(),
                    "BIRCH_FOREST".to_string(),
                    "BIRCH_FOREST_HILLS".to_string(),
                    "ROOFED_FOREST".to_string(),
                ],
            ),
            (
                "rivers".to_string(),
                vec!["RIVER".to_string(), "FROZEN_RIVER".to_string()],
            ),
        ]);

        let profiles = vec![
            ProfileEntry::root(
                "crops",
                GrowthCategory::Plant,
                ProfileOverrides {
                    base_rate: Some(0.25),
                    needs_sunlight: Some(true),
                    not_full_sunlight_multiplier: Some(0.5),
                    greenhouse_rate: Some(0.75),
                    soil_material: Some("SOIL".to_string()),
                    soil_max_layers: Some(1),
                    soil_bonus_per_layer: Some(0.1),
                    biomes: biomes(&[("grasslands", 1.0), ("forests", 0.6)]),
                    ..Default::default()
                },
            ),
            ProfileEntry::child(
                "wheat",
                "crops",
                ProfileOverrides {
                    persistent_growth_period: Some(4.0),
                    not_irrigated_multiplier: Some(0.5),
                    ..Default::default()
                },
            ),
            ProfileEntry::child(
                "carrot",
                "crops",
                ProfileOverrides {
                    persistent_growth_period: Some(6.0),
                    biomes: biomes(&[("forests", 0.8)]),
                    ..Default::default()
                },
            ),
            ProfileEntry::root(
                "sapling",
                GrowthCategory::Tree,
                ProfileOverrides {
                    persistent_growth_period: Some(24.0),
                    needs_sunlight: Some(true),
                    tree_type: Some("TREE".to_string()),
                    biomes: biomes(&[("forests", 1.0), ("grasslands", 0.4)]),
                    ..Default::default()
                },
            ),
            ProfileEntry::root(
                "cactus",
                GrowthCategory::Column,
                ProfileOverrides {
                    base_rate: Some(0.1),
                    soil_material: Some("SAND".to_string()),
                    soil_max_layers: Some(4),
                    soil_bonus_per_layer: Some(0.25),
                    biomes: biomes(&[("DESERT", 1.0), ("MESA", 0.7)]),
                    ..Default::default()
                },
            ),
            ProfileEntry::root(
                "cow",
                GrowthCategory::Entity,
                ProfileOverrides {
                    base_rate: Some(0.8),
                    biomes: biomes(&[("grasslands", 1.0), ("forests", 0.5)]),
                    ..Default::default()
                },
            ),
            ProfileEntry::root(
                "salmon",
                GrowthCategory::FishingDrop,
                ProfileOverrides {
                    base_rate: Some(0.2),
                    biomes: biomes(&[("rivers", 1.0), ("OCEAN", 0.1)]),
                    ..Default::default()
                },
            ),
        ];

        Self {
            log_level: "info".to_string(),
            biome_aliases,
            profiles,
        }
    }
}

/// Default config directory: `<platform config dir>/verdant`, or `./config`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("verdant"))
        .unwrap_or_else(|| PathBuf::from("config"))
}

// --- Load / Save / Reload ---

impl GrowthConfig {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: GrowthConfig = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded growth config from {}", config_path.display());
            Ok(config)
        } else {
            let config = GrowthConfig::default();
            config.save(config_dir)?;
            log::info!("Created default growth config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `growth.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: GrowthConfig =
            ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Growth config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

// --- Profile construction ---

impl GrowthConfig {
    /// Resolves `biome_aliases` into typed biome sets. Unknown biome names are skipped.
    pub fn alias_table(&self) -> BiomeAliasTable {
        let mut table = BiomeAliasTable::new();
        for (alias, names) in &self.biome_aliases {
            let biomes = names
                .iter()
                .filter_map(|name| {
                    let biome = Biome::from_name(name);
                    if biome.is_none() {
                        log::warn!(
                            "loading configs: biome alias \"{alias}\": \"{name}\" is not a valid biome name"
                        );
                    }
                    biome
                })
                .collect();
            table.insert(alias.clone(), biomes);
        }
        table
    }

    /// Builds every configured profile, in order.
    ///
    /// Soft failures inside a profile (bad material, biome or tree names) are
    /// logged and the profile is still built. Structural problems (a missing
    /// parent, a root without a category) fail the whole set.
    pub fn build_profiles(&self) -> Result<ProfileSet, ConfigError> {
        let aliases = self.alias_table();
        let mut set = ProfileSet::new();

        for entry in &self.profiles {
            let parent = match (&entry.parent, entry.category) {
                (Some(parent), category) => {
                    let parent_profile = set.get(parent).cloned().ok_or_else(|| {
                        ConfigError::UnknownParent {
                            profile: entry.name.clone(),
                            parent: parent.clone(),
                        }
                    })?;
                    if let Some(category) = category
                        && category != parent_profile.category()
                    {
                        log::warn!(
                            "loading configs: \"{}\" category {:?} ignored, inherits {:?} from \"{}\"",
                            entry.name,
                            category,
                            parent_profile.category(),
                            parent
                        );
                    }
                    parent_profile
                }
                (None, Some(category)) => {
                    Arc::new(GrowthProfile::make_default(&entry.name, category))
                }
                (None, None) => return Err(ConfigError::MissingCategory(entry.name.clone())),
            };

            let (profile, warnings) =
                GrowthProfile::make_child(&entry.name, &parent, &entry.overrides, &aliases)
                    .into_parts();
            for warning in &warnings {
                log::warn!("loading configs: {warning}");
            }
            if let Some(replaced) = set.insert(profile) {
                log::warn!("loading configs: profile \"{}\" defined twice", replaced.name());
            }
        }

        log::info!("Built {} growth profiles", set.len());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_growth::ProfileStore;

    #[test]
    fn test_default_config_builds() {
        let set = GrowthConfig::default().build_profiles().unwrap();
        assert_eq!(set.len(), 7);

        let wheat = set.get("wheat").unwrap();
        assert_eq!(wheat.category(), GrowthCategory::Plant);
        assert!(wheat.is_persistent());
        assert!(wheat.greenhouse().enabled);
        assert_eq!(wheat.biome_multiplier(Biome::Savanna), Some(1.0));

        let carrot = set.get("carrot").unwrap();
        assert_eq!(carrot.biome_multiplier(Biome::Forest), Some(0.8));
        let crops = set.get("crops").unwrap();
        assert_eq!(crops.biome_multiplier(Biome::Forest), Some(0.6));
        assert!(!crops.is_persistent());
    }

    #[test]
    fn test_unknown_parent() {
        let config = GrowthConfig {
            profiles: vec![ProfileEntry::child("wheat", "crops", ProfileOverrides::default())],
            ..Default::default()
        };
        let err = config.build_profiles().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownParent { ref parent, .. } if parent == "crops"));
    }

    #[test]
    fn test_parent_must_come_first() {
        let config = GrowthConfig {
            profiles: vec![
                ProfileEntry::child("wheat", "crops", ProfileOverrides::default()),
                ProfileEntry::root("crops", GrowthCategory::Plant, ProfileOverrides::default()),
            ],
            ..Default::default()
        };
        assert!(config.build_profiles().is_err());
    }

    #[test]
    fn test_missing_category() {
        let config = GrowthConfig {
            profiles: vec![ProfileEntry {
                name: "mystery".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(matches!(
            config.build_profiles(),
            Err(ConfigError::MissingCategory(name)) if name == "mystery"
        ));
    }

    #[test]
    fn test_bad_names_do_not_fail_build() {
        let mut config = GrowthConfig::default();
        config
            .biome_aliases
            .insert("swamps".to_string(), vec!["SWAMPLAND".to_string(), "BOG".to_string()]);
        config.profiles.push(ProfileEntry::root(
            "rice",
            GrowthCategory::Plant,
            ProfileOverrides {
                soil_material: Some("MUD".to_string()),
                biomes: biomes(&[("swamps", 1.0), ("MARSH", 0.5)]),
                ..Default::default()
            },
        ));
        let set = config.build_profiles().unwrap();
        let rice = set.get("rice").unwrap();
        assert_eq!(rice.soil().material, None);
        assert_eq!(rice.biome_multipliers().len(), 1);
        assert_eq!(rice.biome_multiplier(Biome::Swampland), Some(1.0));
    }

    #[test]
    fn test_parse_profile_entry() {
        let ron_str = r#"(
            log_level: "debug",
            biome_aliases: {"deserts": ["DESERT", "DESERT_HILLS"]},
            profiles: [
                (
                    name: "cactus",
                    category: Some(Column),
                    overrides: (
                        base_rate: Some(0.1),
                        biomes: Some([("deserts", 1.0)]),
                    ),
                ),
                (
                    name: "tall_cactus",
                    parent: Some("cactus"),
                    overrides: (soil_material: Some("SAND"), soil_max_layers: Some(2)),
                ),
            ],
        )"#;
        let config: GrowthConfig = ron::from_str(ron_str).unwrap();
        let set = config.build_profiles().unwrap();
        let tall = set.get("tall cactus").unwrap();
        assert_eq!(tall.category(), GrowthCategory::Column);
        assert_eq!(tall.base_rate(), 0.1);
        assert_eq!(tall.biome_multiplier(Biome::DesertHills), Some(1.0));
        assert_eq!(tall.soil().max_layers, 2);
    }

    #[test]
    fn test_reload_publishes_new_set() {
        let dir = tempfile::tempdir().unwrap();
        let config = GrowthConfig::load_or_create(dir.path()).unwrap();
        let store = ProfileStore::new(config.build_profiles().unwrap());
        let before = store.snapshot();

        let mut modified = config.clone();
        modified.profiles.retain(|entry| entry.name != "salmon");
        modified.save(dir.path()).unwrap();

        let reloaded = config.reload(dir.path()).unwrap().unwrap();
        store.publish(reloaded.build_profiles().unwrap());

        assert!(before.get("salmon").is_some());
        assert!(store.snapshot().get("salmon").is_none());
        assert_eq!(store.snapshot().len(), 6);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GrowthConfig::default();
        config.log_level = "debug".to_string();
        config.save(dir.path()).unwrap();
        let loaded = GrowthConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GrowthConfig::load_or_create(dir.path()).unwrap();
        assert_eq!(config, GrowthConfig::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = GrowthConfig::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<GrowthConfig, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: GrowthConfig = ron::from_str("()").unwrap();
        assert_eq!(config, GrowthConfig::default());
    }
}
