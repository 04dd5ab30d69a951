use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use levelgen_core::mapgen::exposed_floor_cells;
use levelgen_core::{CellState, RunResult, generate};
use levelgen_tools::config_file::{ConfigOverrides, resolve_config};
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Runs many seeds and checks level invariants", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 0)]
    start: u64,
    #[arg(short = 'n', long, default_value_t = 1000)]
    count: u64,
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Treat an exhausted run as a failure
    #[arg(long)]
    require_converged: bool,
    #[command(flatten)]
    overrides: ConfigOverrides,
}

fn check_invariants(result: &RunResult, target: f64) -> Result<(), String> {
    if result.converged() && result.floor_ratio <= target {
        return Err(format!("converged at fill {} which is not above {target}", result.floor_ratio));
    }
    if let Some(pos) = exposed_floor_cells(&result.grid).first() {
        return Err(format!("floor at {pos:?} touches an empty cell"));
    }
    let max_x = result.grid.width() as i32 - 1;
    let max_y = result.grid.height() as i32 - 1;
    for (pos, cell) in result.grid.cells() {
        let on_ring = pos.x == 0 || pos.y == 0 || pos.x == max_x || pos.y == max_y;
        if on_ring && cell == CellState::Floor {
            return Err(format!("floor at {pos:?} sits on the border ring"));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = resolve_config(args.config.as_deref(), &args.overrides)?;

    println!("Sweeping {} seeds from {}...", args.count, args.start);
    let mut converged = 0_u64;
    let mut exhausted = 0_u64;
    let mut total_iterations = 0_u64;

    for seed in args.start..args.start.saturating_add(args.count) {
        let result = generate(&config, seed)?;
        if let Err(reason) = check_invariants(&result, config.percent_to_fill) {
            bail!("Invariant failed on seed {seed}: {reason}");
        }
        total_iterations += u64::from(result.iterations);
        if result.converged() {
            converged += 1;
        } else {
            if args.require_converged {
                bail!("Seed {seed} exhausted after {} iterations", result.iterations);
            }
            info!("seed {seed} exhausted at fill {:.3}", result.floor_ratio);
            exhausted += 1;
        }
    }

    let runs = converged + exhausted;
    println!("Converged: {converged}");
    println!("Exhausted: {exhausted}");
    if runs > 0 {
        println!("Mean iterations: {:.1}", total_iterations as f64 / runs as f64);
    }
    println!("Sweep completed successfully.");
    Ok(())
}
