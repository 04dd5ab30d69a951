//! Drunkard's-walk level generation split into grid, walker, loop and wall stages.

pub mod diagnostics;
pub mod model;
pub mod rng;
pub mod walkers;

mod engine;
mod grid;
mod walls;

pub use diagnostics::{exposed_floor_cells, fill_ratio};
pub use engine::Generator;
pub use grid::Grid;
pub use model::RunResult;
pub use walls::build_walls;

use crate::config::GeneratorConfig;
use crate::error::Result;

/// Validates `config`, runs the walk to completion with `seed` and builds walls.
///
/// Configuration problems are reported before any grid is allocated.
pub fn generate(config: &GeneratorConfig, seed: u64) -> Result<RunResult> {
    let config = config.validate()?;
    Generator::new(&config, seed).finish()
}
