//! Read-only view of the world used by growth-rate resolution.

use serde::{Deserialize, Serialize};

use crate::{Biome, BlockState};

/// Maximum light level for either the sky or the block channel.
pub const MAX_LIGHT_LEVEL: u8 = 15;

/// Integer block coordinate. `y` grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Creates a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position shifted by `(dx, dy, dz)`, clamped to the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z.saturating_add(dz),
        }
    }

    /// Returns the position directly above.
    pub const fn up(self) -> Self {
        self.offset(0, 1, 0)
    }

    /// Returns the position directly below.
    pub const fn down(self) -> Self {
        self.offset(0, -1, 0)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Observable world state at block positions.
///
/// Implementations are expected to be cheap and side-effect free; a single
/// growth check makes a handful of probes around one position.
pub trait WorldQuery {
    /// Biome of the column containing `pos`.
    fn biome_at(&self, pos: BlockPos) -> Biome;

    /// Sky light reaching `pos`, in `0..=15`.
    fn sky_light_at(&self, pos: BlockPos) -> u8;

    /// Light from emissive blocks at `pos`, in `0..=15`.
    fn block_light_at(&self, pos: BlockPos) -> u8;

    /// Returns `true` if the block at `pos` lets light through to itself.
    fn is_transparent(&self, pos: BlockPos) -> bool;

    /// Block at `pos`, or `None` outside the loaded world.
    fn block_at(&self, pos: BlockPos) -> Option<BlockState>;

    /// Position `(dx, dy, dz)` away from `pos`.
    fn relative(&self, pos: BlockPos, dx: i32, dy: i32, dz: i32) -> BlockPos {
        pos.offset(dx, dy, dz)
    }
}

impl<W: WorldQuery + ?Sized> WorldQuery for &W {
    fn biome_at(&self, pos: BlockPos) -> Biome {
        (**self).biome_at(pos)
    }

    fn sky_light_at(&self, pos: BlockPos) -> u8 {
        (**self).sky_light_at(pos)
    }

    fn block_light_at(&self, pos: BlockPos) -> u8 {
        (**self).block_light_at(pos)
    }

    fn is_transparent(&self, pos: BlockPos) -> bool {
        (**self).is_transparent(pos)
    }

    fn block_at(&self, pos: BlockPos) -> Option<BlockState> {
        (**self).block_at(pos)
    }

    fn relative(&self, pos: BlockPos, dx: i32, dy: i32, dz: i32) -> BlockPos {
        (**self).relative(pos, dx, dy, dz)
    }
}
