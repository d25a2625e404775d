//! Block materials and the `(material, data)` pair stored in every block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MaterialParseError, UnknownNameError};

/// Material of a single block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Material {
    Air,
    Stone,
    Grass,
    Dirt,
    Cobblestone,
    Wood,
    Sapling,
    Bedrock,
    Water,
    StationaryWater,
    Lava,
    StationaryLava,
    Sand,
    Gravel,
    Log,
    Leaves,
    Glass,
    LongGrass,
    DeadBush,
    YellowFlower,
    RedRose,
    BrownMushroom,
    RedMushroom,
    Torch,
    Crops,
    Soil,
    Snow,
    Ice,
    SnowBlock,
    Cactus,
    Clay,
    SugarCaneBlock,
    Pumpkin,
    Netherrack,
    SoulSand,
    Glowstone,
    MelonBlock,
    PumpkinStem,
    MelonStem,
    Vine,
    Mycel,
    WaterLily,
    NetherWarts,
    RedstoneLampOff,
    RedstoneLampOn,
    Cocoa,
    Carrot,
    Potato,
    HardClay,
    StainedClay,
}

impl Material {
    /// Every material, in declaration order.
    pub const ALL: [Material; 50] = [
        Self::Air,
        Self::Stone,
        Self::Grass,
        Self::Dirt,
        Self::Cobblestone,
        Self::Wood,
        Self::Sapling,
        Self::Bedrock,
        Self::Water,
        Self::StationaryWater,
        Self::Lava,
        Self::StationaryLava,
        Self::Sand,
        Self::Gravel,
        Self::Log,
        Self::Leaves,
        Self::Glass,
        Self::LongGrass,
        Self::DeadBush,
        Self::YellowFlower,
        Self::RedRose,
        Self::BrownMushroom,
        Self::RedMushroom,
        Self::Torch,
        Self::Crops,
        Self::Soil,
        Self::Snow,
        Self::Ice,
        Self::SnowBlock,
        Self::Cactus,
        Self::Clay,
        Self::SugarCaneBlock,
        Self::Pumpkin,
        Self::Netherrack,
        Self::SoulSand,
        Self::Glowstone,
        Self::MelonBlock,
        Self::PumpkinStem,
        Self::MelonStem,
        Self::Vine,
        Self::Mycel,
        Self::WaterLily,
        Self::NetherWarts,
        Self::RedstoneLampOff,
        Self::RedstoneLampOn,
        Self::Cocoa,
        Self::Carrot,
        Self::Potato,
        Self::HardClay,
        Self::StainedClay,
    ];

    /// Configuration identifier, e.g. `"STATIONARY_WATER"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Air => "AIR",
            Self::Stone => "STONE",
            Self::Grass => "GRASS",
            Self::Dirt => "DIRT",
            Self::Cobblestone => "COBBLESTONE",
            Self::Wood => "WOOD",
            Self::Sapling => "SAPLING",
            Self::Bedrock => "BEDROCK",
            Self::Water => "WATER",
            Self::StationaryWater => "STATIONARY_WATER",
            Self::Lava => "LAVA",
            Self::StationaryLava => "STATIONARY_LAVA",
            Self::Sand => "SAND",
            Self::Gravel => "GRAVEL",
            Self::Log => "LOG",
            Self::Leaves => "LEAVES",
            Self::Glass => "GLASS",
            Self::LongGrass => "LONG_GRASS",
            Self::DeadBush => "DEAD_BUSH",
            Self::YellowFlower => "YELLOW_FLOWER",
            Self::RedRose => "RED_ROSE",
            Self::BrownMushroom => "BROWN_MUSHROOM",
            Self::RedMushroom => "RED_MUSHROOM",
            Self::Torch => "TORCH",
            Self::Crops => "CROPS",
            Self::Soil => "SOIL",
            Self::Snow => "SNOW",
            Self::Ice => "ICE",
            Self::SnowBlock => "SNOW_BLOCK",
            Self::Cactus => "CACTUS",
            Self::Clay => "CLAY",
            Self::SugarCaneBlock => "SUGAR_CANE_BLOCK",
            Self::Pumpkin => "PUMPKIN",
            Self::Netherrack => "NETHERRACK",
            Self::SoulSand => "SOUL_SAND",
            Self::Glowstone => "GLOWSTONE",
            Self::MelonBlock => "MELON_BLOCK",
            Self::PumpkinStem => "PUMPKIN_STEM",
            Self::MelonStem => "MELON_STEM",
            Self::Vine => "VINE",
            Self::Mycel => "MYCEL",
            Self::WaterLily => "WATER_LILY",
            Self::NetherWarts => "NETHER_WARTS",
            Self::RedstoneLampOff => "REDSTONE_LAMP_OFF",
            Self::RedstoneLampOn => "REDSTONE_LAMP_ON",
            Self::Cocoa => "COCOA",
            Self::Carrot => "CARROT",
            Self::Potato => "POTATO",
            Self::HardClay => "HARD_CLAY",
            Self::StainedClay => "STAINED_CLAY",
        }
    }

    /// Looks up a material by its configuration identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Material> {
        Self::ALL
            .iter()
            .copied()
            .find(|material| material.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Returns `true` if sky light reaches the block's own position.
    ///
    /// Non-full blocks (plants, torches, snow layers) count as transparent;
    /// glass, leaves and liquids do not.
    pub fn is_transparent(self) -> bool {
        matches!(
            self,
            Self::Air
                | Self::Sapling
                | Self::LongGrass
                | Self::DeadBush
                | Self::YellowFlower
                | Self::RedRose
                | Self::BrownMushroom
                | Self::RedMushroom
                | Self::Torch
                | Self::Crops
                | Self::Snow
                | Self::SugarCaneBlock
                | Self::PumpkinStem
                | Self::MelonStem
                | Self::Vine
                | Self::WaterLily
                | Self::NetherWarts
                | Self::Cocoa
                | Self::Carrot
                | Self::Potato
        )
    }

    /// Returns `true` for light sources that drive greenhouse growth.
    pub fn is_artificial_light(self) -> bool {
        matches!(self, Self::Glowstone | Self::RedstoneLampOn)
    }

    /// Returns `true` for flowing or still water.
    pub fn is_water(self) -> bool {
        matches!(self, Self::Water | Self::StationaryWater)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownNameError::Material(s.to_string()))
    }
}

/// A block as the world stores it: material plus a sub-type byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockState {
    /// Block material.
    pub material: Material,
    /// Material-specific sub-type (wool colour, crop age, ...).
    pub data: u8,
}

impl BlockState {
    /// Air with no sub-type.
    pub const AIR: BlockState = BlockState::new(Material::Air);

    /// Creates a block of `material` with sub-type 0.
    pub const fn new(material: Material) -> Self {
        Self { material, data: 0 }
    }

    /// Creates a block of `material` with the given sub-type.
    pub const fn with_data(material: Material, data: u8) -> Self {
        Self { material, data }
    }

    /// Parses a `"NAME"` or `"NAME:data"` material spec.
    ///
    /// The sub-type is `None` when the spec names no data byte, meaning any
    /// sub-type of the material matches.
    pub fn parse_spec(spec: &str) -> Result<(Material, Option<u8>), MaterialParseError> {
        let (name, data) = match spec.split_once(':') {
            Some((name, data)) => {
                let data = data
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| MaterialParseError::InvalidData(data.to_string()))?;
                (name, Some(data))
            }
            None => (spec, None),
        };
        let material =
            Material::from_name(name).ok_or_else(|| MaterialParseError::UnknownMaterial(name.to_string()))?;
        Ok((material, data))
    }

    /// Returns `true` if this block is `material` and, when `data` is given,
    /// carries exactly that sub-type.
    pub fn matches(self, material: Material, data: Option<u8>) -> bool {
        self.material == material && data.is_none_or(|d| d == self.data)
    }
}

impl Default for BlockState {
    fn default() -> Self {
        Self::AIR
    }
}

impl From<Material> for BlockState {
    fn from(material: Material) -> Self {
        Self::new(material)
    }
}
