//! Walker population: spawning, stepping, turning, culling and clamping.
//!
//! Walkers are plain `Copy` values held in a `Vec`. Every phase updates them in
//! place by index, so there is no copy-back step to forget.

use rand_chacha::rand_core::Rng;

use crate::config::ValidatedConfig;
use crate::types::{Pos, Walker};

use super::rng::{random_direction, roll_chance};

/// Centre cell, `round(width / 2), round(height / 2)`.
pub fn grid_center(width: usize, height: usize) -> Pos {
    Pos { y: (height as f64 / 2.0).round() as i32, x: (width as f64 / 2.0).round() as i32 }
}

pub fn spawn_initial<R: Rng + ?Sized>(
    config: &ValidatedConfig,
    center: Pos,
    rng: &mut R,
) -> Vec<Walker> {
    (0..config.amount_of_starting_walkers())
        .map(|_| Walker { pos: center, direction: random_direction(rng) })
        .collect()
}

pub fn advance(walker: Walker) -> Walker {
    Walker { pos: walker.pos.step(walker.direction), ..walker }
}

/// Rolls once for every walker alive when the phase starts. Walkers appended
/// here are not rolled for until the next phase. Returns how many were added.
pub fn maybe_spawn<R: Rng + ?Sized>(
    walkers: &mut Vec<Walker>,
    config: &ValidatedConfig,
    rng: &mut R,
) -> usize {
    let eligible = walkers.len();
    let mut spawned = 0;
    for index in 0..eligible {
        if roll_chance(rng, config.chance_walker_spawn()) && walkers.len() < config.max_walkers() {
            let pos = walkers[index].pos;
            walkers.push(Walker { pos, direction: random_direction(rng) });
            spawned += 1;
        }
    }
    spawned
}

/// Removes at most one walker, never the last one.
pub fn maybe_destroy<R: Rng + ?Sized>(
    walkers: &mut Vec<Walker>,
    config: &ValidatedConfig,
    rng: &mut R,
) -> Option<Walker> {
    for index in 0..walkers.len() {
        if roll_chance(rng, config.chance_walker_destroy()) && walkers.len() > 1 {
            return Some(walkers.remove(index));
        }
    }
    None
}

pub fn maybe_turn<R: Rng + ?Sized>(walkers: &mut [Walker], config: &ValidatedConfig, rng: &mut R) {
    for walker in walkers.iter_mut() {
        if roll_chance(rng, config.chance_walker_change_dir()) {
            walker.direction = random_direction(rng);
        }
    }
}

/// Keeps walkers off the outer ring so the wall pass always has room.
///
/// Both dimensions must be at least 3, which every validated config
/// guarantees. Without an interior there is nowhere to clamp to, so the
/// walkers are left where they are.
pub fn clamp_to_interior(walkers: &mut [Walker], width: usize, height: usize) {
    debug_assert!(width >= 3 && height >= 3, "{width}x{height} grid has no interior");
    if width < 3 || height < 3 {
        return;
    }
    let max_x = width as i32 - 2;
    let max_y = height as i32 - 2;
    for walker in walkers.iter_mut() {
        walker.pos.x = walker.pos.x.clamp(1, max_x);
        walker.pos.y = walker.pos.y.clamp(1, max_y);
    }
}
