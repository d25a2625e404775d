//! Growth profiles: the inheritable rate parameters of one growable category.
//!
//! A profile is either a neutral default ([`GrowthProfile::make_default`]) or a
//! copy of a parent with a sparse set of overrides applied on top
//! ([`GrowthProfile::make_child`]). Profiles are immutable once built.

use std::fmt;

use serde::{Deserialize, Serialize};
use verdant_world::{Biome, BlockState, Material, TreeType};

use crate::biomes::{BiomeAliasTable, BiomeMultipliers, load_biomes};
use crate::overrides::ProfileOverrides;
use crate::warning::{ConfigWarning, Diagnosed};

/// Seconds per hour, for persistent growth periods.
pub const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;

/// What kind of growable a profile describes. Selects the resolution branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GrowthCategory {
    /// Crops and other block plants.
    Plant,
    /// Saplings.
    Tree,
    /// Stacking plants such as cactus and sugar cane.
    Column,
    /// Breeding animals.
    Entity,
    /// Extra fishing loot; uses base rate and biome only.
    FishingDrop,
}

/// Artificial-light override settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Greenhouse {
    /// Set when a greenhouse rate was configured.
    pub enabled: bool,
    /// Environment multiplier used next to an artificial light source.
    pub rate: f64,
    /// Defer the biome multiplier so the greenhouse rate can replace it.
    pub ignore_biome: bool,
}

impl Default for Greenhouse {
    fn default() -> Self {
        Self {
            enabled: false,
            rate: 1.0,
            ignore_biome: false,
        }
    }
}

/// Real-time growth: one full cycle per `period_hours`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Persistence {
    /// Hours per growth cycle. Always positive and finite.
    pub period_hours: f64,
}

impl Persistence {
    /// Per-second growth probability for this period.
    pub fn per_second_rate(self) -> f64 {
        1.0 / (self.period_hours * SECONDS_PER_HOUR)
    }
}

/// Bonus for layers of a specific soil beneath the growable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoilBonus {
    /// Material that earns the bonus. `None` disables the bonus.
    pub material: Option<Material>,
    /// Required sub-type; `None` accepts any.
    pub data: Option<u8>,
    /// Maximum number of layers counted.
    pub max_layers: u32,
    /// Bonus added per matching layer.
    pub bonus_per_layer: f64,
    /// Layers below the growable where counting starts.
    pub layer_offset: i32,
}

impl SoilBonus {
    /// Returns `true` if `block` counts as a soil layer.
    pub fn matches(&self, block: BlockState) -> bool {
        self.material
            .is_some_and(|material| block.matches(material, self.data))
    }
}

impl Default for SoilBonus {
    fn default() -> Self {
        Self {
            material: None,
            data: None,
            max_layers: 0,
            bonus_per_layer: 0.0,
            layer_offset: 1,
        }
    }
}

/// Rate parameters for one growable.
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthProfile {
    name: String,
    category: GrowthCategory,
    base_rate: f64,
    biome_multipliers: BiomeMultipliers,
    greenhouse: Greenhouse,
    persistence: Option<Persistence>,
    needs_sunlight: bool,
    not_full_sunlight_multiplier: f64,
    not_irrigated_multiplier: f64,
    soil: SoilBonus,
    tree_type: Option<TreeType>,
}

/// Lower-cases `name` and turns underscores into spaces.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', " ")
}

impl GrowthProfile {
    /// Creates a neutral profile: full base rate, no biomes (so a zero rate
    /// everywhere until biomes are added), every modifier disabled.
    pub fn make_default(name: &str, category: GrowthCategory) -> Self {
        Self {
            name: normalize_name(name),
            category,
            base_rate: 1.0,
            biome_multipliers: BiomeMultipliers::new(),
            greenhouse: Greenhouse::default(),
            persistence: None,
            needs_sunlight: false,
            not_full_sunlight_multiplier: 1.0,
            not_irrigated_multiplier: 1.0,
            soil: SoilBonus::default(),
            tree_type: None,
        }
    }

    /// Builds a profile from a copy of `parent` with `overrides` applied.
    ///
    /// The parent is never touched. Persistence is not inherited: the child is
    /// persistent only if its own overrides set a period. Unrecognised
    /// materials, biomes and tree types leave the feature as inherited and are
    /// reported in the returned warnings.
    pub fn make_child(
        name: &str,
        parent: &GrowthProfile,
        overrides: &ProfileOverrides,
        aliases: &BiomeAliasTable,
    ) -> Diagnosed<GrowthProfile> {
        let mut profile = GrowthProfile {
            name: normalize_name(name),
            persistence: None,
            ..parent.clone()
        };
        let mut warnings = Vec::new();

        if let Some(rate) = overrides.base_rate {
            profile.base_rate = rate;
        }

        if let Some(rate) = overrides.greenhouse_rate {
            profile.greenhouse.enabled = true;
            profile.greenhouse.rate = rate;
        }
        if let Some(ignore) = overrides.greenhouse_ignore_biome {
            profile.greenhouse.ignore_biome = ignore;
        }

        if let Some(period) = overrides.persistent_growth_period {
            if period.is_finite() && period > 0.0 {
                profile.persistence = Some(Persistence {
                    period_hours: period,
                });
            } else {
                warnings.push(ConfigWarning::InvalidPersistencePeriod {
                    profile: profile.name.clone(),
                    period,
                });
            }
        }

        if let Some(needs) = overrides.needs_sunlight {
            profile.needs_sunlight = needs;
        }
        if let Some(multiplier) = overrides.not_full_sunlight_multiplier {
            profile.not_full_sunlight_multiplier = multiplier;
        }
        if let Some(multiplier) = overrides.not_irrigated_multiplier {
            profile.not_irrigated_multiplier = multiplier;
        }

        if let Some(spec) = &overrides.soil_material {
            match BlockState::parse_spec(spec) {
                Ok((material, data)) => {
                    profile.soil.material = Some(material);
                    profile.soil.data = data;
                }
                Err(source) => warnings.push(ConfigWarning::SoilMaterial {
                    profile: profile.name.clone(),
                    source,
                }),
            }
        }
        if let Some(layers) = overrides.soil_max_layers {
            profile.soil.max_layers = layers;
        }
        if let Some(bonus) = overrides.soil_bonus_per_layer {
            profile.soil.bonus_per_layer = bonus;
        }
        if let Some(offset) = overrides.soil_layer_offset {
            profile.soil.layer_offset = offset;
        }

        if let Some(tree) = &overrides.tree_type {
            match TreeType::from_name(tree) {
                Some(tree_type) => profile.tree_type = Some(tree_type),
                None => warnings.push(ConfigWarning::UnknownTreeType {
                    profile: profile.name.clone(),
                    name: tree.clone(),
                }),
            }
        }

        if let Some(section) = &overrides.biomes {
            warnings.extend(load_biomes(
                &profile.name,
                &mut profile.biome_multipliers,
                section,
                aliases,
            ));
        }

        tracing::debug!(
            profile = %profile.name,
            parent = %parent.name,
            warnings = warnings.len(),
            "built growth profile"
        );
        Diagnosed::new(profile, warnings)
    }

    /// Normalised profile name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> GrowthCategory {
        self.category
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    pub fn biome_multipliers(&self) -> &BiomeMultipliers {
        &self.biome_multipliers
    }

    /// Multiplier for `biome`, or `None` if the profile cannot grow there.
    pub fn biome_multiplier(&self, biome: Biome) -> Option<f64> {
        self.biome_multipliers.get(biome)
    }

    pub fn greenhouse(&self) -> Greenhouse {
        self.greenhouse
    }

    pub fn persistence(&self) -> Option<Persistence> {
        self.persistence
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    pub fn needs_sunlight(&self) -> bool {
        self.needs_sunlight
    }

    pub fn not_full_sunlight_multiplier(&self) -> f64 {
        self.not_full_sunlight_multiplier
    }

    pub fn not_irrigated_multiplier(&self) -> f64 {
        self.not_irrigated_multiplier
    }

    pub fn soil(&self) -> &SoilBonus {
        &self.soil
    }

    pub fn tree_type(&self) -> Option<TreeType> {
        self.tree_type
    }
}

impl fmt::Display for GrowthProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GrowthProfile.{}", self.name)
    }
}
