//! Turns a [`GrowthProfile`] and a world position into a growth rate.
//!
//! Resolution is a pure function of the profile and what the world reports
//! at a few positions around the growable. It never fails: anything the
//! world cannot provide contributes a neutral factor, except an unlisted
//! biome, which yields a zero rate.
//!
//! For every category except [`GrowthCategory::FishingDrop`] the rate is
//!
//! ```text
//! rate = base * environment * irrigation * (1 + soil)
//! ```
//!
//! where `base` is the base rate (or the per-second persistent rate) and
//! `environment` combines biome, sunlight and greenhouse effects.

use verdant_world::{BlockPos, MAX_LIGHT_LEVEL, WorldQuery};

use crate::offsets::{GREENHOUSE_LIGHT_OFFSETS, IRRIGATION_OFFSETS};
use crate::profile::{GrowthCategory, GrowthProfile, SoilBonus};

const MAX_LIGHT_INTENSITY: f64 = MAX_LIGHT_LEVEL as f64;

/// Block-light level next to an emitter that is not itself the sky.
const GREENHOUSE_BLOCK_LIGHT: u8 = MAX_LIGHT_LEVEL - 1;

/// Growth rate of `profile` at `pos`.
pub fn resolve<W: WorldQuery + ?Sized>(profile: &GrowthProfile, world: &W, pos: BlockPos) -> f64 {
    if profile.category() == GrowthCategory::FishingDrop {
        return resolve_base(profile, world, pos);
    }

    let mut rate = match profile.persistence() {
        Some(persistence) => persistence.per_second_rate(),
        None => profile.base_rate(),
    };

    let Some(biome_multiplier) = profile.biome_multiplier(world.biome_at(pos)) else {
        return 0.0;
    };
    let mut environment = biome_multiplier;

    // Unless the greenhouse may replace it, the biome factor is spent here.
    let greenhouse = profile.greenhouse();
    if !greenhouse.ignore_biome {
        rate *= environment;
        environment = 1.0;
    }

    let sunlight = sampled_sky_light(world, pos);
    if profile.needs_sunlight() {
        environment *= (f64::from(sunlight) / MAX_LIGHT_INTENSITY).powi(3);
    }
    if sunlight < MAX_LIGHT_LEVEL {
        environment *= profile.not_full_sunlight_multiplier();
    }

    if greenhouse.enabled
        && environment < greenhouse.rate
        && world.block_light_at(pos) == GREENHOUSE_BLOCK_LIGHT
        && has_artificial_light(world, pos)
    {
        environment = greenhouse.rate;
    }

    rate *= environment;

    if profile.not_irrigated_multiplier() != 1.0 && !is_irrigated(world, pos) {
        rate *= profile.not_irrigated_multiplier();
    }

    rate * (1.0 + soil_bonus(profile.soil(), world, pos))
}

/// Base rate scaled by the biome multiplier, or `0.0` in an unlisted biome.
///
/// This is the whole computation for fishing drops.
pub fn resolve_base<W: WorldQuery + ?Sized>(
    profile: &GrowthProfile,
    world: &W,
    pos: BlockPos,
) -> f64 {
    match profile.biome_multiplier(world.biome_at(pos)) {
        Some(multiplier) => profile.base_rate() * multiplier,
        None => 0.0,
    }
}

/// Sky light at the growable, or above it when the growable blocks light.
fn sampled_sky_light<W: WorldQuery + ?Sized>(world: &W, pos: BlockPos) -> u8 {
    if world.is_transparent(pos) {
        world.sky_light_at(pos)
    } else {
        world.sky_light_at(world.relative(pos, 0, 1, 0))
    }
}

fn has_artificial_light<W: WorldQuery + ?Sized>(world: &W, pos: BlockPos) -> bool {
    GREENHOUSE_LIGHT_OFFSETS.iter().any(|&(dx, dy, dz)| {
        world
            .block_at(world.relative(pos, dx, dy, dz))
            .is_some_and(|block| block.material.is_artificial_light())
    })
}

fn is_irrigated<W: WorldQuery + ?Sized>(world: &W, pos: BlockPos) -> bool {
    IRRIGATION_OFFSETS.iter().any(|&(dx, dy, dz)| {
        let probe = world.relative(pos, dx, dy, dz);
        world.biome_at(probe).is_river()
            && world
                .block_at(probe)
                .is_some_and(|block| block.material.is_water())
    })
}

/// Accumulated bonus for consecutive soil layers starting `layer_offset` below `pos`.
///
/// A first layer outside the `i32` coordinate range contributes nothing.
fn soil_bonus<W: WorldQuery + ?Sized>(soil: &SoilBonus, world: &W, pos: BlockPos) -> f64 {
    let Some(depth) = soil.layer_offset.checked_neg() else {
        return 0.0;
    };
    if pos.y.checked_add(depth).is_none() {
        return 0.0;
    }
    let mut bonus = 0.0;
    let mut layer = world.relative(pos, 0, depth, 0);
    for _ in 0..soil.max_layers {
        match world.block_at(layer) {
            Some(block) if soil.matches(block) => bonus += soil.bonus_per_layer,
            _ => break,
        }
        if layer.y == i32::MIN {
            break;
        }
        layer = world.relative(layer, 0, -1, 0);
    }
    bonus
}
