//! Harness time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time a
//! car needs to travel one floor; `SimConfig::tick_duration_ms` maps ticks to
//! the seconds passed to the dispatcher's periodic `update` hook.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute harness tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration for the host harness.
///
/// Typically loaded from a JSON file by the demo binary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Wall-clock milliseconds one tick represents.
    pub tick_duration_ms: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Report car snapshots every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Tick length in seconds, as handed to `Dispatcher::update`.
    #[inline]
    pub fn tick_secs(&self) -> f64 {
        self.tick_duration_ms as f64 / 1_000.0
    }

    /// Reject configurations the harness cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.tick_duration_ms == 0 {
            return Err(LiftError::Config("tick_duration_ms must be positive".into()));
        }
        Ok(())
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_ms:        1_500,
            total_ticks:             600,
            seed:                    42,
            snapshot_interval_ticks: 1,
        }
    }
}
