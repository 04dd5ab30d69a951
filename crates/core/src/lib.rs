pub mod config;
pub mod error;
pub mod mapgen;
pub mod types;

pub use config::{DEFAULT_MAX_ITERATIONS, GeneratorConfig, MAX_GRID_CELLS, ValidatedConfig};
pub use error::{GenError, Result};
pub use mapgen::{Generator, Grid, RunResult, generate};
pub use types::*;
