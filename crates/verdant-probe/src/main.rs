//! Probe binary: resolves the growth rate of one configured profile in a
//! world described on the command line.
//!
//! Run with `cargo run -p verdant-probe -- --profile wheat --sky-light 12`.

mod scene;

use clap::Parser;
use tracing::{error, info};
use verdant_config::{CliArgs, GrowthConfig, default_config_dir};
use verdant_growth::{resolve, resolve_base};
use verdant_world::WorldQuery;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut config = GrowthConfig::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        GrowthConfig::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    verdant_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let profiles = match config.build_profiles() {
        Ok(profiles) => profiles,
        Err(e) => {
            error!("Failed to build growth profiles: {e}");
            std::process::exit(1);
        }
    };

    let Some(profile) = profiles.get(&args.profile) else {
        error!("No growth profile named \"{}\"", args.profile);
        std::process::exit(1);
    };

    let world = match scene::build_scene(&args) {
        Ok(world) => world,
        Err(e) => {
            error!("Invalid scene: {e}");
            std::process::exit(1);
        }
    };

    let pos = scene::GROWABLE;
    let rate = resolve(profile, &world, pos);
    info!(
        profile = %profile,
        category = ?profile.category(),
        biome = %world.biome_at(pos),
        base = resolve_base(profile, &world, pos),
        "resolved growth rate"
    );

    if profile.is_persistent() && rate > 0.0 {
        let hours = 1.0 / (rate * verdant_growth::SECONDS_PER_HOUR);
        println!("{}: {rate:.9} per second ({hours:.2} hours per cycle)", profile.name());
    } else {
        println!("{}: {rate:.6}", profile.name());
    }
}
