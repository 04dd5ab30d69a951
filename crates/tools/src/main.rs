use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use levelgen_core::generate;
use levelgen_tools::config_file::{ConfigOverrides, resolve_config};
use levelgen_tools::render::{render_ascii, tile_placements};
use levelgen_tools::seed::SeedChoice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Text picture, `#` walls and `.` floor
    Ascii,
    /// Full run result as JSON
    Json,
    /// Tilemap placements as JSON
    Tiles,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the run; one is generated and reported when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Write the level here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref(), &args.overrides)?;
    let seed = SeedChoice::resolve(args.seed);
    let result = generate(&config, seed.value())
        .with_context(|| format!("Generation failed for seed {}", seed.value()))?;

    let rendered = match args.format {
        OutputFormat::Ascii => render_ascii(&result.grid),
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Tiles => serde_json::to_string_pretty(&tile_placements(
            &result.grid,
            config.world_units_per_cell,
            config.room_size_world_units,
        ))?,
    };

    match &args.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write level to {}", path.display()))?,
        None => print!("{rendered}"),
    }

    let seed_label = match seed {
        SeedChoice::Cli(_) => "",
        SeedChoice::Generated(_) => " (generated)",
    };
    eprintln!("Seed: {}{seed_label}", seed.value());
    eprintln!("Size: {}x{}", result.grid.width(), result.grid.height());
    eprintln!("Termination: {:?} after {} iterations", result.termination, result.iterations);
    eprintln!("Fill: {:.3} (target {})", result.floor_ratio, config.percent_to_fill);
    eprintln!("Walls: {}", result.wall_count);

    Ok(())
}
