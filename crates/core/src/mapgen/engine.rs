//! Iterative carving loop driving the walker population over the grid.

use log::{debug, trace, warn};
use rand_chacha::ChaCha8Rng;

use crate::config::ValidatedConfig;
use crate::error::{GenError, Result};
use crate::types::{CellState, RunState, Termination, Walker};

use super::diagnostics::fill_ratio;
use super::grid::Grid;
use super::model::RunResult;
use super::rng::seeded;
use super::walkers::{
    advance, clamp_to_interior, grid_center, maybe_destroy, maybe_spawn, maybe_turn,
    spawn_initial,
};
use super::walls::build_walls;

/// One generation run. Owns its grid and walkers exclusively; callers can
/// look at them between steps but never mutate them.
pub struct Generator {
    config: ValidatedConfig,
    seed: u64,
    rng: ChaCha8Rng,
    grid: Grid,
    walkers: Vec<Walker>,
    iterations: u32,
    state: RunState,
    failure: Option<GenError>,
}

impl Generator {
    pub fn new(config: &ValidatedConfig, seed: u64) -> Self {
        let width = config.room_width();
        let height = config.room_height();
        let mut rng = seeded(seed);
        let grid = Grid::new(width, height);

        let mut walkers = spawn_initial(config, grid_center(width, height), &mut rng);
        // On a 3-wide grid the rounded centre lands on the border ring.
        clamp_to_interior(&mut walkers, width, height);

        debug!(
            "generation start: seed={seed} size={width}x{height} walkers={} target={}",
            walkers.len(),
            config.percent_to_fill()
        );

        Self {
            config: config.clone(),
            seed,
            rng,
            grid,
            walkers,
            iterations: 0,
            state: RunState::Running,
            failure: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs one full iteration. A finished run is left untouched; an aborted
    /// one keeps returning the error that stopped it.
    pub fn step(&mut self) -> Result<RunState> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if self.state.is_finished() {
            return Ok(self.state);
        }

        if let Err(err) = self.paint() {
            warn!("run aborted after {} iterations: {err}", self.iterations);
            self.state = RunState::Aborted;
            self.failure = Some(err.clone());
            return Err(err);
        }
        for walker in self.walkers.iter_mut() {
            *walker = advance(*walker);
        }

        let spawned = maybe_spawn(&mut self.walkers, &self.config, &mut self.rng);
        let destroyed = maybe_destroy(&mut self.walkers, &self.config, &mut self.rng);
        maybe_turn(&mut self.walkers, &self.config, &mut self.rng);
        clamp_to_interior(&mut self.walkers, self.grid.width(), self.grid.height());
        self.iterations += 1;

        let ratio = fill_ratio(&self.grid);
        trace!(
            "iteration {}: walkers={} spawned={spawned} destroyed={} fill={ratio:.4}",
            self.iterations,
            self.walkers.len(),
            destroyed.is_some()
        );

        if ratio > self.config.percent_to_fill() {
            self.state = RunState::Converged;
            debug!("converged after {} iterations at fill {ratio:.4}", self.iterations);
        } else if self.iterations >= self.config.max_iterations() {
            self.state = RunState::Exhausted;
            warn!(
                "iteration cap {} reached at fill {ratio:.4} (target {}), seed {}",
                self.config.max_iterations(),
                self.config.percent_to_fill(),
                self.seed
            );
        }
        Ok(self.state)
    }

    /// Floors every walker's cell. Positions are checked first so a bad one
    /// leaves the grid as it was.
    fn paint(&mut self) -> Result<()> {
        for walker in &self.walkers {
            self.grid.get_pos(walker.pos)?;
        }
        for walker in &self.walkers {
            self.grid.set_pos(walker.pos, CellState::Floor)?;
        }
        Ok(())
    }

    /// Steps until the run converges or exhausts its budget.
    pub fn run(&mut self) -> Result<RunState> {
        loop {
            let state = self.step()?;
            if state.is_finished() {
                return Ok(state);
            }
        }
    }

    /// Completes the run, thickens walls and hands the grid over.
    pub fn finish(mut self) -> Result<RunResult> {
        // `run` only returns Converged or Exhausted; an aborted run is an error.
        let termination = match self.run()? {
            RunState::Converged => Termination::Converged,
            _ => Termination::Exhausted,
        };
        let floor_ratio = fill_ratio(&self.grid);
        let wall_count = build_walls(&mut self.grid)?;
        debug!("placed {wall_count} walls around {} floor cells", self.grid.count(CellState::Floor));

        Ok(RunResult {
            seed: self.seed,
            grid: self.grid,
            iterations: self.iterations,
            termination,
            floor_ratio,
            walkers_remaining: self.walkers.len(),
            wall_count,
        })
    }
}
