//! Tree variants a sapling can grow into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownNameError;

/// Shape of tree produced when a sapling profile succeeds.
///
/// Carried on growth profiles as a tag for the caller; it plays no part in
/// rate computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TreeType {
    Tree,
    BigTree,
    Redwood,
    TallRedwood,
    MegaRedwood,
    Birch,
    TallBirch,
    Jungle,
    SmallJungle,
    CocoaTree,
    JungleBush,
    RedMushroom,
    BrownMushroom,
    Swamp,
    Acacia,
    DarkOak,
}

impl TreeType {
    /// Every tree type, in declaration order.
    pub const ALL: [TreeType; 16] = [
        Self::Tree,
        Self::BigTree,
        Self::Redwood,
        Self::TallRedwood,
        Self::MegaRedwood,
        Self::Birch,
        Self::TallBirch,
        Self::Jungle,
        Self::SmallJungle,
        Self::CocoaTree,
        Self::JungleBush,
        Self::RedMushroom,
        Self::BrownMushroom,
        Self::Swamp,
        Self::Acacia,
        Self::DarkOak,
    ];

    /// Configuration identifier, e.g. `"TALL_REDWOOD"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tree => "TREE",
            Self::BigTree => "BIG_TREE",
            Self::Redwood => "REDWOOD",
            Self::TallRedwood => "TALL_REDWOOD",
            Self::MegaRedwood => "MEGA_REDWOOD",
            Self::Birch => "BIRCH",
            Self::TallBirch => "TALL_BIRCH",
            Self::Jungle => "JUNGLE",
            Self::SmallJungle => "SMALL_JUNGLE",
            Self::CocoaTree => "COCOA_TREE",
            Self::JungleBush => "JUNGLE_BUSH",
            Self::RedMushroom => "RED_MUSHROOM",
            Self::BrownMushroom => "BROWN_MUSHROOM",
            Self::Swamp => "SWAMP",
            Self::Acacia => "ACACIA",
            Self::DarkOak => "DARK_OAK",
        }
    }

    /// Looks up a tree type by its configuration identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<TreeType> {
        Self::ALL
            .iter()
            .copied()
            .find(|tree| tree.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeType {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownNameError::TreeType(s.to_string()))
    }
}
