//! World vocabulary shared by growth profiles and rate resolution: biomes,
//! block materials, tree types, block positions and the [`WorldQuery`] trait.

pub mod biome;
pub mod error;
pub mod grid;
pub mod material;
pub mod query;
pub mod tree;

pub use biome::Biome;
pub use error::{MaterialParseError, UnknownNameError};
pub use grid::GridWorld;
pub use material::{BlockState, Material};
pub use query::{BlockPos, MAX_LIGHT_LEVEL, WorldQuery};
pub use tree::TreeType;
