//! Sparse in-memory world implementing [`WorldQuery`].
//!
//! [`GridWorld`] stores only what differs from its defaults: unset blocks are
//! Air, unset columns report the default biome, sky light defaults to full
//! and block light to zero. Positions outside `[min_y, max_y]` have no block.

use rustc_hash::FxHashMap;

use crate::query::{BlockPos, MAX_LIGHT_LEVEL, WorldQuery};
use crate::{Biome, BlockState};

/// A bounded, sparse block world.
#[derive(Clone, Debug)]
pub struct GridWorld {
    min_y: i32,
    max_y: i32,
    default_biome: Biome,
    biomes: FxHashMap<(i32, i32), Biome>,
    blocks: FxHashMap<BlockPos, BlockState>,
    sky_light: FxHashMap<BlockPos, u8>,
    block_light: FxHashMap<BlockPos, u8>,
}

impl GridWorld {
    /// Creates an all-Air world spanning `min_y..=max_y` where every column is `default_biome`.
    pub fn new(min_y: i32, max_y: i32, default_biome: Biome) -> Self {
        debug_assert!(min_y <= max_y);
        Self {
            min_y,
            max_y,
            default_biome,
            biomes: FxHashMap::default(),
            blocks: FxHashMap::default(),
            sky_light: FxHashMap::default(),
            block_light: FxHashMap::default(),
        }
    }

    /// Returns `true` if `pos.y` lies within the world's vertical bounds.
    pub fn contains(&self, pos: BlockPos) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y)
    }

    /// Sets the biome of the column at `(x, z)`.
    pub fn set_biome(&mut self, x: i32, z: i32, biome: Biome) {
        self.biomes.insert((x, z), biome);
    }

    /// Places a block. No-op with a warning log if `pos` is out of bounds.
    pub fn set_block(&mut self, pos: BlockPos, block: impl Into<BlockState>) {
        if !self.contains(pos) {
            tracing::warn!("GridWorld::set_block out of bounds: {:?}", pos);
            return;
        }
        let block = block.into();
        if block == BlockState::AIR {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Places `block` at `depth` consecutive positions starting at `top` and going down.
    pub fn fill_down(&mut self, top: BlockPos, depth: u32, block: impl Into<BlockState>) {
        let block = block.into();
        let mut pos = top;
        for _ in 0..depth {
            self.set_block(pos, block);
            pos = pos.down();
        }
    }

    /// Sets the sky light level at `pos` (clamped to 15).
    pub fn set_sky_light(&mut self, pos: BlockPos, level: u8) {
        self.sky_light.insert(pos, level.min(MAX_LIGHT_LEVEL));
    }

    /// Sets the block light level at `pos` (clamped to 15).
    pub fn set_block_light(&mut self, pos: BlockPos, level: u8) {
        self.block_light.insert(pos, level.min(MAX_LIGHT_LEVEL));
    }
}

impl WorldQuery for GridWorld {
    fn biome_at(&self, pos: BlockPos) -> Biome {
        self.biomes
            .get(&(pos.x, pos.z))
            .copied()
            .unwrap_or(self.default_biome)
    }

    fn sky_light_at(&self, pos: BlockPos) -> u8 {
        self.sky_light.get(&pos).copied().unwrap_or(MAX_LIGHT_LEVEL)
    }

    fn block_light_at(&self, pos: BlockPos) -> u8 {
        self.block_light.get(&pos).copied().unwrap_or(0)
    }

    fn is_transparent(&self, pos: BlockPos) -> bool {
        self.block_at(pos)
            .is_none_or(|block| block.material.is_transparent())
    }

    fn block_at(&self, pos: BlockPos) -> Option<BlockState> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.blocks.get(&pos).copied().unwrap_or(BlockState::AIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Material;

    #[test]
    fn test_defaults() {
        let world = GridWorld::new(0, 255, Biome::Plains);
        let pos = BlockPos::new(3, 64, 3);
        assert_eq!(world.biome_at(pos), Biome::Plains);
        assert_eq!(world.sky_light_at(pos), 15);
        assert_eq!(world.block_light_at(pos), 0);
        assert_eq!(world.block_at(pos), Some(BlockState::AIR));
        assert!(world.is_transparent(pos));
    }

    #[test]
    fn test_out_of_bounds_has_no_block() {
        let mut world = GridWorld::new(0, 15, Biome::Plains);
        let below = BlockPos::new(0, -1, 0);
        assert_eq!(world.block_at(below), None);
        world.set_block(below, Material::Dirt);
        assert_eq!(world.block_at(below), None);
    }

    #[test]
    fn test_biome_is_per_column() {
        let mut world = GridWorld::new(0, 255, Biome::Plains);
        world.set_biome(5, 0, Biome::River);
        assert_eq!(world.biome_at(BlockPos::new(5, 10, 0)), Biome::River);
        assert_eq!(world.biome_at(BlockPos::new(5, 200, 0)), Biome::River);
        assert_eq!(world.biome_at(BlockPos::new(4, 10, 0)), Biome::Plains);
    }

    #[test]
    fn test_fill_down() {
        let mut world = GridWorld::new(0, 255, Biome::Plains);
        world.fill_down(BlockPos::new(0, 63, 0), 3, Material::Clay);
        assert_eq!(world.block_at(BlockPos::new(0, 63, 0)), Some(BlockState::new(Material::Clay)));
        assert_eq!(world.block_at(BlockPos::new(0, 61, 0)), Some(BlockState::new(Material::Clay)));
        assert_eq!(world.block_at(BlockPos::new(0, 60, 0)), Some(BlockState::AIR));
    }

    #[test]
    fn test_transparency_follows_material() {
        let mut world = GridWorld::new(0, 255, Biome::Plains);
        let pos = BlockPos::new(0, 64, 0);
        world.set_block(pos, Material::Crops);
        assert!(world.is_transparent(pos));
        world.set_block(pos, Material::Pumpkin);
        assert!(!world.is_transparent(pos));
    }

    #[test]
    fn test_light_is_clamped() {
        let mut world = GridWorld::new(0, 255, Biome::Plains);
        let pos = BlockPos::new(0, 64, 0);
        world.set_sky_light(pos, 40);
        world.set_block_light(pos, 14);
        assert_eq!(world.sky_light_at(pos), 15);
        assert_eq!(world.block_light_at(pos), 14);
    }
}
