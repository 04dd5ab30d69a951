//! Generation parameters: the raw, file-facing form and its checked counterpart.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Hard cap on loop iterations, the safety valve for fill targets the walk can
/// never reach. A configured budget may only lower it.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100_000;

/// Largest grid a run will allocate, 4096×4096 cells.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Raw parameters as written in a config file or built by a caller.
///
/// Nothing here is trusted until [`GeneratorConfig::validate`] has run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Room extent in world units, `[x, y]`.
    pub room_size_world_units: [f64; 2],
    pub world_units_per_cell: f64,
    pub chance_walker_change_dir: f64,
    pub chance_walker_spawn: f64,
    pub chance_walker_destroy: f64,
    pub amount_of_starting_walkers: usize,
    pub max_walkers: usize,
    pub percent_to_fill: f64,
    pub max_iterations: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_size_world_units: [30.0, 30.0],
            world_units_per_cell: 1.0,
            chance_walker_change_dir: 0.5,
            chance_walker_spawn: 0.05,
            chance_walker_destroy: 0.05,
            amount_of_starting_walkers: 1,
            max_walkers: 10,
            percent_to_fill: 0.2,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl GeneratorConfig {
    /// Default walk parameters on a grid of exactly `width × height` cells.
    pub fn for_grid(width: usize, height: usize) -> Self {
        Self {
            room_size_world_units: [width as f64, height as f64],
            world_units_per_cell: 1.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<ValidatedConfig> {
        let cell = self.world_units_per_cell;
        if !cell.is_finite() || cell <= 0.0 {
            return Err(GenError::invalid(
                "world_units_per_cell",
                format!("must be a positive finite number, got {cell}"),
            ));
        }

        let room_width =
            cells_along("room_size_world_units[0]", self.room_size_world_units[0], cell)?;
        let room_height =
            cells_along("room_size_world_units[1]", self.room_size_world_units[1], cell)?;
        if room_width.checked_mul(room_height).is_none_or(|cells| cells > MAX_GRID_CELLS) {
            return Err(GenError::invalid(
                "room_size_world_units",
                format!("{room_width}x{room_height} cells exceeds the {MAX_GRID_CELLS} cell limit"),
            ));
        }

        let chance_walker_change_dir =
            probability("chance_walker_change_dir", self.chance_walker_change_dir)?;
        let chance_walker_spawn = probability("chance_walker_spawn", self.chance_walker_spawn)?;
        let chance_walker_destroy =
            probability("chance_walker_destroy", self.chance_walker_destroy)?;

        if self.amount_of_starting_walkers == 0 {
            return Err(GenError::invalid("amount_of_starting_walkers", "must be at least 1"));
        }
        if self.max_walkers < self.amount_of_starting_walkers {
            return Err(GenError::invalid(
                "max_walkers",
                format!(
                    "({}) must not be below amount_of_starting_walkers ({})",
                    self.max_walkers, self.amount_of_starting_walkers
                ),
            ));
        }

        let fill = self.percent_to_fill;
        if !(fill > 0.0 && fill <= 1.0) {
            return Err(GenError::invalid(
                "percent_to_fill",
                format!("must be in (0, 1], got {fill}"),
            ));
        }
        if self.max_iterations == 0 {
            return Err(GenError::invalid("max_iterations", "must be at least 1"));
        }
        if self.max_iterations > DEFAULT_MAX_ITERATIONS {
            return Err(GenError::invalid(
                "max_iterations",
                format!("must not exceed {DEFAULT_MAX_ITERATIONS}, got {}", self.max_iterations),
            ));
        }

        Ok(ValidatedConfig {
            room_width,
            room_height,
            world_units_per_cell: cell,
            chance_walker_change_dir,
            chance_walker_spawn,
            chance_walker_destroy,
            amount_of_starting_walkers: self.amount_of_starting_walkers,
            max_walkers: self.max_walkers,
            percent_to_fill: fill,
            max_iterations: self.max_iterations,
        })
    }
}

fn cells_along(field: &'static str, world_units: f64, cell: f64) -> Result<usize> {
    let cells = (world_units / cell).round();
    if !cells.is_finite() || cells < 3.0 {
        return Err(GenError::invalid(
            field,
            format!("must span at least 3 cells, got {world_units} / {cell}"),
        ));
    }
    if cells > i32::MAX as f64 {
        return Err(GenError::invalid(field, format!("{cells} cells exceeds the coordinate range")));
    }
    Ok(cells as usize)
}

fn probability(field: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GenError::invalid(field, format!("must be a probability in [0, 1], got {value}")))
    }
}

/// Checked, immutable parameters for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedConfig {
    room_width: usize,
    room_height: usize,
    world_units_per_cell: f64,
    chance_walker_change_dir: f64,
    chance_walker_spawn: f64,
    chance_walker_destroy: f64,
    amount_of_starting_walkers: usize,
    max_walkers: usize,
    percent_to_fill: f64,
    max_iterations: u32,
}

impl ValidatedConfig {
    pub fn room_width(&self) -> usize {
        self.room_width
    }

    pub fn room_height(&self) -> usize {
        self.room_height
    }

    pub fn world_units_per_cell(&self) -> f64 {
        self.world_units_per_cell
    }

    pub fn chance_walker_change_dir(&self) -> f64 {
        self.chance_walker_change_dir
    }

    pub fn chance_walker_spawn(&self) -> f64 {
        self.chance_walker_spawn
    }

    pub fn chance_walker_destroy(&self) -> f64 {
        self.chance_walker_destroy
    }

    pub fn amount_of_starting_walkers(&self) -> usize {
        self.amount_of_starting_walkers
    }

    pub fn max_walkers(&self) -> usize {
        self.max_walkers
    }

    pub fn percent_to_fill(&self) -> f64 {
        self.percent_to_fill
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
