//! Command-line arguments for probing growth rates.

use std::path::PathBuf;

use clap::Parser;

use crate::GrowthConfig;

/// Verdant probe command-line arguments.
///
/// Describes a single growable and its surroundings; CLI values override
/// settings loaded from `growth.ron`.
#[derive(Parser, Debug)]
#[command(name = "verdant-probe", about = "Resolve the growth rate of a configured profile")]
pub struct CliArgs {
    /// Profile to resolve (e.g. "wheat").
    #[arg(long)]
    pub profile: String,

    /// Biome of the growable's column.
    #[arg(long, default_value = "PLAINS")]
    pub biome: String,

    /// Material of the growable block itself.
    #[arg(long, default_value = "CROPS")]
    pub block: String,

    /// Sky light at the growable (0-15).
    #[arg(long, default_value_t = 15)]
    pub sky_light: u8,

    /// Block light at the growable (0-15).
    #[arg(long, default_value_t = 0)]
    pub block_light: u8,

    /// Place a lit glowstone block above the growable.
    #[arg(long)]
    pub lamp: bool,

    /// Place river water within irrigation reach.
    #[arg(long)]
    pub river_water: bool,

    /// Soil material beneath the growable, as `NAME` or `NAME:data`.
    #[arg(long, default_value = "DIRT")]
    pub soil: String,

    /// Number of soil layers beneath the growable.
    #[arg(long, default_value_t = 1)]
    pub soil_layers: u32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl GrowthConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.log_level = level.clone();
        }
    }
}
