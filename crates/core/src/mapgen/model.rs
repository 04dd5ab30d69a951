//! Output of a finished generation run.

use serde::Serialize;

use crate::types::Termination;

use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunResult {
    pub seed: u64,
    pub grid: Grid,
    /// Loop iterations consumed, counting the one that reached the target.
    pub iterations: u32,
    pub termination: Termination,
    /// Fill ratio of the floor-only grid, measured before walls were added.
    pub floor_ratio: f64,
    pub walkers_remaining: usize,
    pub wall_count: usize,
}

impl RunResult {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
