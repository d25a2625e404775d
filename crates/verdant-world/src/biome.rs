//! Biome identities reported by the world for every column.
//!
//! Names follow the upper-case identifiers used in growth configuration files
//! (`PLAINS`, `FROZEN_RIVER`, ...). Lookup by name is exact.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownNameError;

/// A biome the world can report for a block column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Biome {
    Ocean,
    Plains,
    Desert,
    ExtremeHills,
    Forest,
    Taiga,
    Swampland,
    River,
    Hell,
    Sky,
    FrozenOcean,
    FrozenRiver,
    IcePlains,
    IceMountains,
    MushroomIsland,
    MushroomShore,
    Beach,
    DesertHills,
    ForestHills,
    TaigaHills,
    SmallMountains,
    Jungle,
    JungleHills,
    JungleEdge,
    DeepOcean,
    StoneBeach,
    ColdBeach,
    BirchForest,
    BirchForestHills,
    RoofedForest,
    ColdTaiga,
    ColdTaigaHills,
    MegaTaiga,
    MegaTaigaHills,
    ExtremeHillsPlus,
    Savanna,
    SavannaPlateau,
    Mesa,
    MesaPlateauForest,
    MesaPlateau,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Biome; 40] = [
        Self::Ocean,
        Self::Plains,
        Self::Desert,
        Self::ExtremeHills,
        Self::Forest,
        Self::Taiga,
        Self::Swampland,
        Self::River,
        Self::Hell,
        Self::Sky,
        Self::FrozenOcean,
        Self::FrozenRiver,
        Self::IcePlains,
        Self::IceMountains,
        Self::MushroomIsland,
        Self::MushroomShore,
        Self::Beach,
        Self::DesertHills,
        Self::ForestHills,
        Self::TaigaHills,
        Self::SmallMountains,
        Self::Jungle,
        Self::JungleHills,
        Self::JungleEdge,
        Self::DeepOcean,
        Self::StoneBeach,
        Self::ColdBeach,
        Self::BirchForest,
        Self::BirchForestHills,
        Self::RoofedForest,
        Self::ColdTaiga,
        Self::ColdTaigaHills,
        Self::MegaTaiga,
        Self::MegaTaigaHills,
        Self::ExtremeHillsPlus,
        Self::Savanna,
        Self::SavannaPlateau,
        Self::Mesa,
        Self::MesaPlateauForest,
        Self::MesaPlateau,
    ];

    /// Configuration identifier, e.g. `"FROZEN_RIVER"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ocean => "OCEAN",
            Self::Plains => "PLAINS",
            Self::Desert => "DESERT",
            Self::ExtremeHills => "EXTREME_HILLS",
            Self::Forest => "FOREST",
            Self::Taiga => "TAIGA",
            Self::Swampland => "SWAMPLAND",
            Self::River => "RIVER",
            Self::Hell => "HELL",
            Self::Sky => "SKY",
            Self::FrozenOcean => "FROZEN_OCEAN",
            Self::FrozenRiver => "FROZEN_RIVER",
            Self::IcePlains => "ICE_PLAINS",
            Self::IceMountains => "ICE_MOUNTAINS",
            Self::MushroomIsland => "MUSHROOM_ISLAND",
            Self::MushroomShore => "MUSHROOM_SHORE",
            Self::Beach => "BEACH",
            Self::DesertHills => "DESERT_HILLS",
            Self::ForestHills => "FOREST_HILLS",
            Self::TaigaHills => "TAIGA_HILLS",
            Self::SmallMountains => "SMALL_MOUNTAINS",
            Self::Jungle => "JUNGLE",
            Self::JungleHills => "JUNGLE_HILLS",
            Self::JungleEdge => "JUNGLE_EDGE",
            Self::DeepOcean => "DEEP_OCEAN",
            Self::StoneBeach => "STONE_BEACH",
            Self::ColdBeach => "COLD_BEACH",
            Self::BirchForest => "BIRCH_FOREST",
            Self::BirchForestHills => "BIRCH_FOREST_HILLS",
            Self::RoofedForest => "ROOFED_FOREST",
            Self::ColdTaiga => "COLD_TAIGA",
            Self::ColdTaigaHills => "COLD_TAIGA_HILLS",
            Self::MegaTaiga => "MEGA_TAIGA",
            Self::MegaTaigaHills => "MEGA_TAIGA_HILLS",
            Self::ExtremeHillsPlus => "EXTREME_HILLS_PLUS",
            Self::Savanna => "SAVANNA",
            Self::SavannaPlateau => "SAVANNA_PLATEAU",
            Self::Mesa => "MESA",
            Self::MesaPlateauForest => "MESA_PLATEAU_FOREST",
            Self::MesaPlateau => "MESA_PLATEAU",
        }
    }

    /// Looks up a biome by its exact configuration identifier.
    pub fn from_name(name: &str) -> Option<Biome> {
        Self::ALL.iter().copied().find(|biome| biome.name() == name)
    }

    /// Returns `true` for the fresh-water biomes that count as irrigation.
    pub fn is_river(self) -> bool {
        matches!(self, Self::River | Self::FrozenRiver)
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Biome {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownNameError::Biome(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for biome in Biome::ALL {
            assert_eq!(Biome::from_name(biome.name()), Some(biome));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Biome::from_name("FROZEN_RIVER"), Some(Biome::FrozenRiver));
        assert_eq!(Biome::from_name("frozen_river"), None);
        assert_eq!(Biome::from_name(" PLAINS "), None);
        assert!("Plains".parse::<Biome>().is_err());
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Biome::from_name("CANDY_LAND"), None);
        let err = "CANDY_LAND".parse::<Biome>().unwrap_err();
        assert_eq!(err.to_string(), "unknown biome name: CANDY_LAND");
    }

    #[test]
    fn test_river_biomes() {
        assert!(Biome::River.is_river());
        assert!(Biome::FrozenRiver.is_river());
        assert!(!Biome::Ocean.is_river());
        assert!(!Biome::Swampland.is_river());
    }

    #[test]
    fn test_serde_uses_config_names() {
        let ron_str = ron::to_string(&Biome::MegaTaigaHills).unwrap();
        assert_eq!(ron_str, "MEGA_TAIGA_HILLS");
        let parsed: Biome = ron::from_str("BIRCH_FOREST").unwrap();
        assert_eq!(parsed, Biome::BirchForest);
    }
}
