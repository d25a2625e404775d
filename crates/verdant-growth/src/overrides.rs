//! Sparse field overrides applied on top of a parent profile.

use serde::{Deserialize, Serialize};

/// Per-profile override set as it appears in configuration.
///
/// Every field is optional and presence alone decides whether it overrides
/// the inherited value: `Some(0.0)` still replaces the parent's rate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOverrides {
    /// Starting growth chance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<f64>,

    /// Environment multiplier under artificial light. Presence enables the greenhouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greenhouse_rate: Option<f64>,

    /// Whether the greenhouse rate replaces the biome multiplier instead of stacking on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greenhouse_ignore_biome: Option<bool>,

    /// Hours for one full growth cycle. Presence makes growth persistent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_growth_period: Option<f64>,

    /// Scale the rate by the cube of the sky-light fraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_sunlight: Option<bool>,

    /// Multiplier applied when sky light is below 15.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_full_sunlight_multiplier: Option<f64>,

    /// Multiplier applied when no river water is nearby. `1.0` disables the check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_irrigated_multiplier: Option<f64>,

    /// Soil material as `"NAME"` or `"NAME:data"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_material: Option<String>,

    /// Maximum number of soil layers that earn a bonus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_max_layers: Option<u32>,

    /// Bonus added per matching soil layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_bonus_per_layer: Option<f64>,

    /// Layers below the growable where the soil walk starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soil_layer_offset: Option<i32>,

    /// Tree shape tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_type: Option<String>,

    /// Biome or alias name to multiplier, applied in list order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biomes: Option<Vec<(String, f64)>>,
}

impl ProfileOverrides {
    /// Returns `true` if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_absent() {
        let overrides: ProfileOverrides = ron::from_str("(base_rate: Some(0.25))").unwrap();
        assert_eq!(overrides.base_rate, Some(0.25));
        assert_eq!(overrides.greenhouse_rate, None);
        assert_eq!(overrides.biomes, None);
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_explicit_zero_is_present() {
        let overrides: ProfileOverrides =
            ron::from_str("(not_irrigated_multiplier: Some(0.0))").unwrap();
        assert_eq!(overrides.not_irrigated_multiplier, Some(0.0));
    }

    #[test]
    fn test_biomes_keep_order() {
        let overrides: ProfileOverrides = ron::from_str(
            r#"(biomes: Some([("forests", 0.5), ("PLAINS", 1.0), ("forests", 0.7)]))"#,
        )
        .unwrap();
        let keys: Vec<&str> = overrides
            .biomes
            .as_deref()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["forests", "PLAINS", "forests"]);
    }

    #[test]
    fn test_empty() {
        let overrides: ProfileOverrides = ron::from_str("()").unwrap();
        assert!(overrides.is_empty());
    }
}
