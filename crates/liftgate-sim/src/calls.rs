//! Where button presses come from: scripted call plans and random traffic.
//!
//! # CSV format
//!
//! One hall call per row; rows need not be sorted.
//!
//! ```csv
//! tick,floor,direction
//! 0,2,up
//! 5,7,down
//! 5,0,up
//! ```
//!
//! Calls sharing a tick are issued in file order.

use std::io::Read;
use std::path::Path;

use liftgate_core::{Direction, Floor, SimRng, Tick};
use serde::Deserialize;

use crate::{SimError, SimResult};

/// A hall-call button press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HallCall {
    pub floor:     Floor,
    pub direction: Direction,
}

/// A hall call issued at a fixed tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScheduledCall {
    pub tick: Tick,
    pub call: HallCall,
}

// ── CallPlan ──────────────────────────────────────────────────────────────────

/// Scripted hall calls, consumed in tick order.
#[derive(Clone, Debug, Default)]
pub struct CallPlan {
    calls:  Vec<ScheduledCall>,
    cursor: usize,
}

impl CallPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a plan; calls are stably sorted by tick.
    pub fn new(mut calls: Vec<ScheduledCall>) -> Self {
        calls.sort_by_key(|c| c.tick);
        Self { calls, cursor: 0 }
    }

    /// Remove and return the calls due at `tick`.
    ///
    /// Calls scheduled before `tick` that were never drained are returned
    /// too, so skipping ahead never loses a press.
    pub fn drain_due(&mut self, tick: Tick) -> &[ScheduledCall] {
        let start = self.cursor;
        while self.cursor < self.calls.len() && self.calls[self.cursor].tick <= tick {
            self.cursor += 1;
        }
        &self.calls[start..self.cursor]
    }

    /// Every call in the plan, drained or not.
    pub fn calls(&self) -> &[ScheduledCall] {
        &self.calls
    }

    /// Calls not yet drained.
    pub fn remaining(&self) -> usize {
        self.calls.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

// ── RandomTraffic ─────────────────────────────────────────────────────────────

/// Seeded random button presses.
///
/// Each tick produces at most one hall call (with `hall_call_probability`),
/// and each stop produces at most one cab call (with `cab_call_probability`)
/// to a floor other than the one the car stopped at.
pub struct RandomTraffic {
    rng:                   SimRng,
    hall_call_probability: f64,
    cab_call_probability:  f64,
}

impl RandomTraffic {
    pub fn new(rng: SimRng, hall_call_probability: f64, cab_call_probability: f64) -> Self {
        Self {
            rng,
            hall_call_probability,
            cab_call_probability,
        }
    }

    pub fn hall_call(&mut self, floor_count: u32) -> Option<HallCall> {
        if !self.rng.gen_bool(self.hall_call_probability) {
            return None;
        }
        let floor = self.rng.floor(floor_count);
        let direction = self.rng.call_direction(floor, floor_count);
        Some(HallCall { floor, direction })
    }

    pub fn cab_call(&mut self, at: Floor, floor_count: u32) -> Option<Floor> {
        if floor_count < 2 || !self.rng.gen_bool(self.cab_call_probability) {
            return None;
        }
        // Draw from the other floor_count - 1 floors and skip over `at`.
        let drawn = self.rng.floor(floor_count - 1);
        Some(if drawn >= at { Floor(drawn.0 + 1) } else { drawn })
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick:      u64,
    floor:     i32,
    direction: String,
}

/// Load a [`CallPlan`] from a CSV file.
pub fn load_calls_csv(path: &Path) -> SimResult<CallPlan> {
    let file = std::fs::File::open(path)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(reader: R) -> SimResult<CallPlan> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for (row, result) in csv_reader.deserialize::<CallRecord>().enumerate() {
        let record = result.map_err(|e| SimError::CallPlan(format!("row {}: {e}", row + 1)))?;
        let direction = record
            .direction
            .parse::<Direction>()
            .map_err(|e| SimError::CallPlan(format!("row {}: {e}", row + 1)))?;
        calls.push(ScheduledCall {
            tick: Tick(record.tick),
            call: HallCall {
                floor: Floor(record.floor),
                direction,
            },
        });
    }

    Ok(CallPlan::new(calls))
}
