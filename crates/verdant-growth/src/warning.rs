//! Soft-failure diagnostics produced while building growth profiles.
//!
//! Bad override input never aborts construction. The offending feature is
//! left unapplied and a [`ConfigWarning`] is returned alongside the value so
//! the caller can decide where to report it.

use verdant_world::MaterialParseError;

/// A configuration entry that was ignored during profile construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    /// `soil_material` did not parse; the soil bonus keeps its inherited material.
    #[error("\"{profile}\" soil_material: {source}")]
    SoilMaterial {
        /// Profile being built.
        profile: String,
        /// Why the material spec was rejected.
        #[source]
        source: MaterialParseError,
    },

    /// A `biomes` key named neither an alias nor a biome.
    #[error("in \"{profile}\" biomes: \"{name}\" is not a valid biome name")]
    UnknownBiome {
        /// Profile being built.
        profile: String,
        /// The unrecognised key.
        name: String,
    },

    /// `tree_type` did not name a tree type.
    #[error("\"{profile}\" tree_type: \"{name}\" is not a valid tree type")]
    UnknownTreeType {
        /// Profile being built.
        profile: String,
        /// The unrecognised value.
        name: String,
    },

    /// `persistent_growth_period` was zero, negative or not finite.
    #[error("\"{profile}\" persistent_growth_period: {period} is not a positive number of hours")]
    InvalidPersistencePeriod {
        /// Profile being built.
        profile: String,
        /// The rejected period.
        period: f64,
    },
}

/// A value together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosed<T> {
    /// The constructed value.
    pub value: T,
    /// Everything that was skipped along the way, in encounter order.
    pub warnings: Vec<ConfigWarning>,
}

impl<T> Diagnosed<T> {
    /// Wraps a value with the given warnings.
    pub fn new(value: T, warnings: Vec<ConfigWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns `true` if nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Splits into the value and its warnings.
    pub fn into_parts(self) -> (T, Vec<ConfigWarning>) {
        (self.value, self.warnings)
    }
}
