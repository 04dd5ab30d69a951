//! TOML-backed generator configuration with command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use levelgen_core::GeneratorConfig;

/// Reads a `GeneratorConfig` from TOML. Missing keys keep their defaults.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<GeneratorConfig> {
    Ok(toml::from_str(content)?)
}

/// Flags that override individual config values.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Room width in world units
    #[arg(long)]
    pub room_width: Option<f64>,
    /// Room height in world units
    #[arg(long)]
    pub room_height: Option<f64>,
    #[arg(long)]
    pub world_units_per_cell: Option<f64>,
    #[arg(long)]
    pub chance_change_dir: Option<f64>,
    #[arg(long)]
    pub chance_spawn: Option<f64>,
    #[arg(long)]
    pub chance_destroy: Option<f64>,
    #[arg(long)]
    pub starting_walkers: Option<usize>,
    #[arg(long)]
    pub max_walkers: Option<usize>,
    /// Target share of floor cells, in (0, 1]
    #[arg(long)]
    pub fill: Option<f64>,
    /// Iteration budget before a run is reported as exhausted
    #[arg(long)]
    pub max_iterations: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(value) = self.room_width {
            config.room_size_world_units[0] = value;
        }
        if let Some(value) = self.room_height {
            config.room_size_world_units[1] = value;
        }
        if let Some(value) = self.world_units_per_cell {
            config.world_units_per_cell = value;
        }
        if let Some(value) = self.chance_change_dir {
            config.chance_walker_change_dir = value;
        }
        if let Some(value) = self.chance_spawn {
            config.chance_walker_spawn = value;
        }
        if let Some(value) = self.chance_destroy {
            config.chance_walker_destroy = value;
        }
        if let Some(value) = self.starting_walkers {
            config.amount_of_starting_walkers = value;
        }
        if let Some(value) = self.max_walkers {
            config.max_walkers = value;
        }
        if let Some(value) = self.fill {
            config.percent_to_fill = value;
        }
        if let Some(value) = self.max_iterations {
            config.max_iterations = value;
        }
    }
}

/// Loads `path` when given (defaults otherwise) and applies `overrides` on top.
pub fn resolve_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    overrides.apply(&mut config);
    Ok(config)
}
