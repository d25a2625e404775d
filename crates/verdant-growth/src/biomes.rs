//! Biome multiplier tables and alias expansion.
//!
//! Aliases are expanded once, while a profile is built. At resolve time a
//! biome either has an exact entry in [`BiomeMultipliers`] or it has none.

use hashbrown::HashMap;
use verdant_world::Biome;

use crate::warning::ConfigWarning;

/// Named groups of biomes, e.g. `"forests" -> [FOREST, BIRCH_FOREST, ...]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiomeAliasTable {
    aliases: HashMap<String, Vec<Biome>>,
}

impl BiomeAliasTable {
    /// Creates an empty alias table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an alias.
    pub fn insert(&mut self, name: impl Into<String>, biomes: Vec<Biome>) {
        self.aliases.insert(name.into(), biomes);
    }

    /// Returns the biomes behind `name`, if it is an alias.
    pub fn get(&self, name: &str) -> Option<&[Biome]> {
        self.aliases.get(name).map(Vec::as_slice)
    }

    /// Returns the number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns `true` if no aliases are registered.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec<Biome>)> for BiomeAliasTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec<Biome>)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, biomes) in iter {
            table.insert(name, biomes);
        }
        table
    }
}

/// Per-biome growth multipliers. A missing biome means the profile cannot grow there.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BiomeMultipliers {
    entries: HashMap<Biome, f64>,
}

impl BiomeMultipliers {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the multiplier for `biome`, replacing any previous value.
    pub fn insert(&mut self, biome: Biome, multiplier: f64) {
        self.entries.insert(biome, multiplier);
    }

    /// Exact lookup.
    pub fn get(&self, biome: Biome) -> Option<f64> {
        self.entries.get(&biome).copied()
    }

    /// Returns the number of biomes with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no biome has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(biome, multiplier)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Biome, f64)> + '_ {
        self.entries.iter().map(|(biome, multiplier)| (*biome, *multiplier))
    }
}

/// Merges a `biomes` section into `multipliers`.
///
/// Each key is tried as an alias first (assigning the value to every biome in
/// the alias), then as a biome name. Unknown keys are skipped with a warning.
/// Later keys overwrite earlier ones for the same biome.
pub fn load_biomes(
    profile: &str,
    multipliers: &mut BiomeMultipliers,
    section: &[(String, f64)],
    aliases: &BiomeAliasTable,
) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    for (key, multiplier) in section {
        if let Some(biomes) = aliases.get(key) {
            for &biome in biomes {
                multipliers.insert(biome, *multiplier);
            }
        } else if let Some(biome) = Biome::from_name(key) {
            multipliers.insert(biome, *multiplier);
        } else {
            warnings.push(ConfigWarning::UnknownBiome {
                profile: profile.to_string(),
                name: key.clone(),
            });
        }
    }
    warnings
}
