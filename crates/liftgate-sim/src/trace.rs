//! `CsvTraceObserver`: writes per-car snapshots as CSV.
//!
//! ```csv
//! tick,elevator,floor,direction,queue
//! 0,0,0,up,2
//! 1,0,1,up,2 5
//! ```
//!
//! `queue` is the dispatcher's stop list for the car, space separated.

use std::io::Write;

use liftgate_core::Tick;
use liftgate_dispatch::Dispatcher;
use serde::Serialize;

use crate::{SimCar, SimError, SimObserver, SimResult};

#[derive(Serialize)]
struct SnapshotRow<'a> {
    tick:      u64,
    elevator:  u32,
    floor:     i32,
    direction: &'a str,
    queue:     String,
}

/// A [`SimObserver`] that records one CSV row per car at every snapshot.
///
/// Errors from the writer are stored because observer hooks return nothing.
/// Check them with [`take_error`][Self::take_error] after the run.
pub struct CsvTraceObserver<W: Write> {
    writer:     csv::Writer<W>,
    rows:       u64,
    last_error: Option<SimError>,
}

impl<W: Write> CsvTraceObserver<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer:     csv::Writer::from_writer(inner),
            rows:       0,
            last_error: None,
        }
    }

    /// Rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<SimError> {
        self.last_error.take()
    }

    /// Flush and return the inner writer.
    pub fn into_inner(self) -> SimResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SimError::Io(e.into_error()))
    }

    fn store_err(&mut self, result: SimResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for CsvTraceObserver<W> {
    fn on_snapshot(&mut self, tick: Tick, cars: &[SimCar], dispatcher: &Dispatcher) {
        for (car, state) in cars.iter().zip(dispatcher.elevators()) {
            let queue = state
                .queue
                .as_slice()
                .iter()
                .map(|f| f.0.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            let row = SnapshotRow {
                tick:      tick.0,
                elevator:  car.id.0,
                floor:     car.floor.0,
                direction: state.direction.as_str(),
                queue,
            };
            let result = self.writer.serialize(row).map_err(SimError::from);
            if result.is_ok() {
                self.rows += 1;
            }
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.flush().map_err(SimError::from);
        self.store_err(result);
    }
}
