//! Deterministic run-level RNG.
//!
//! The harness draws every random passenger call from a single `SimRng`
//! seeded from `SimConfig::seed`, and the tick loop is single-threaded, so a
//! seed fully determines a run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Direction, Floor};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Run-level RNG for call generation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one stream
    /// per call generator.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// A floor uniformly in `0..floor_count`.
    ///
    /// # Panics
    /// Panics if `floor_count == 0`.
    #[inline]
    pub fn floor(&mut self, floor_count: u32) -> Floor {
        Floor(self.0.gen_range(0..floor_count) as i32)
    }

    /// A call direction that makes sense at `floor`: always `Up` on the
    /// ground floor, always `Down` on the top floor, a coin flip elsewhere.
    pub fn call_direction(&mut self, floor: Floor, floor_count: u32) -> Direction {
        if floor == Floor::GROUND {
            Direction::Up
        } else if floor.0 as u32 + 1 >= floor_count {
            Direction::Down
        } else if self.0.gen_bool(0.5) {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}
