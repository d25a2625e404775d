//! Builds a small world around one growable from CLI flags.

use verdant_config::CliArgs;
use verdant_growth::offsets::IRRIGATION_REACH;
use verdant_world::{
    Biome, BlockPos, BlockState, GridWorld, Material, MaterialParseError, UnknownNameError,
};

/// Where the growable sits in the probe world.
pub const GROWABLE: BlockPos = BlockPos::new(0, 64, 0);

/// Errors turning CLI flags into a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// `--biome` or `--block` named nothing known.
    #[error(transparent)]
    UnknownName(#[from] UnknownNameError),

    /// `--soil` did not parse.
    #[error("--soil: {0}")]
    Soil(#[from] MaterialParseError),
}

/// Assembles the world described by `args`.
///
/// Soil fills `soil_layers` blocks directly beneath the growable with stone
/// below that. `--river-water` puts water in a river column at irrigation
/// reach to the west, one layer down.
pub fn build_scene(args: &CliArgs) -> Result<GridWorld, SceneError> {
    let biome: Biome = args.biome.parse()?;
    let block: Material = args.block.parse()?;
    let (soil_material, soil_data) = BlockState::parse_spec(&args.soil)?;
    let soil = BlockState::with_data(soil_material, soil_data.unwrap_or(0));

    let mut world = GridWorld::new(0, 255, biome);
    world.fill_down(GROWABLE.down(), GROWABLE.y as u32, Material::Stone);
    world.fill_down(GROWABLE.down(), args.soil_layers, soil);
    world.set_block(GROWABLE, block);
    world.set_sky_light(GROWABLE, args.sky_light);
    world.set_sky_light(GROWABLE.up(), args.sky_light);
    world.set_block_light(GROWABLE, args.block_light);

    if args.lamp {
        world.set_block(GROWABLE.up(), Material::Glowstone);
    }
    if args.river_water {
        let water = GROWABLE.offset(-IRRIGATION_REACH, -1, 0);
        world.set_biome(water.x, water.z, Biome::River);
        world.set_block(water, Material::StationaryWater);
    }

    tracing::debug!(%biome, %block, soil = %soil.material, layers = args.soil_layers, "built probe scene");
    Ok(world)
}
