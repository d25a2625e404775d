//! Growth profiles and growth-rate resolution.
//!
//! A [`GrowthProfile`] bundles the rate parameters of one growable (crop,
//! sapling, column plant, breeding animal, fishing bonus). Profiles inherit
//! from one another by copy-and-override. [`resolve`] combines a profile with
//! what a [`WorldQuery`](verdant_world::WorldQuery) reports around a block
//! into a single chance.

pub mod biomes;
pub mod offsets;
pub mod overrides;
pub mod profile;
pub mod resolver;
pub mod set;
pub mod warning;

pub use biomes::{BiomeAliasTable, BiomeMultipliers, load_biomes};
pub use overrides::ProfileOverrides;
pub use profile::{
    Greenhouse, GrowthCategory, GrowthProfile, Persistence, SECONDS_PER_HOUR, SoilBonus,
    normalize_name,
};
pub use resolver::{resolve, resolve_base};
pub use set::{ProfileSet, ProfileStore};
pub use warning::{ConfigWarning, Diagnosed};
