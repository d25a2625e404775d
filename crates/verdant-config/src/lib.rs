//! Growth configuration for Verdant.
//!
//! Loads profile definitions and biome aliases from a RON file, builds them
//! into a [`ProfileSet`](verdant_growth::ProfileSet), and detects on-disk
//! changes for hot reload. CLI overrides are parsed with clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, GrowthConfig, ProfileEntry, default_config_dir};
pub use error::ConfigError;
