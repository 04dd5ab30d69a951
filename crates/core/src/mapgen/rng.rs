//! Seeded randomness for the walk: unit rolls and cardinal direction draws.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::types::Direction;

const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform value in `[0, 1)` built from the top 53 bits of one draw.
pub fn roll_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * UNIT_SCALE
}

/// `true` with probability `chance`; always consumes exactly one draw.
pub fn roll_chance<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    roll_unit(rng) < chance
}

/// Each direction with probability exactly 1/4, taken from the top two bits of one draw.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    Direction::ALL[(rng.next_u64() >> 62) as usize]
}
