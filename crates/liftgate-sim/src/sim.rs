//! The `Sim` struct and its tick loop.

use liftgate_core::{SimConfig, Tick};
use liftgate_dispatch::{DispatchEvent, Dispatcher};
use log::trace;

use crate::{CallPlan, HallCall, RandomTraffic, SimCar, SimObserver, SimResult};

/// Running totals over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Hall-call presses handed to the dispatcher (repeats included).
    pub hall_calls: u64,
    /// Cab-call presses handed to the dispatcher.
    pub cab_calls: u64,
    /// Stops made across the fleet.
    pub stops: u64,
    /// Events of any kind handed to the dispatcher.
    pub events: u64,
}

/// The harness runner.
///
/// Holds the dispatcher and the cars it drives, plus the call sources.
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (total ticks, seed, tick length, …).
    pub config: SimConfig,

    /// The next tick to process.
    pub clock: Tick,

    /// The dispatch core under test.
    pub dispatcher: Dispatcher,

    /// Cars in fleet order; `cars[id.index()]` is car `id`.
    pub cars: Vec<SimCar>,

    /// Scripted hall calls.
    pub plan: CallPlan,

    /// Optional random hall / cab calls.
    pub traffic: Option<RandomTraffic>,

    pub stats: SimStats,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Press a hall-call button now, outside the call plan.
    pub fn press_hall_call<O: SimObserver>(&mut self, call: HallCall, observer: &mut O) -> SimResult<()> {
        self.hall_call(call, observer)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);
        let before = self.stats.events;

        self.process_tick(now, observer)?;

        observer.on_tick_end(now, (self.stats.events - before) as usize);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.cars, &self.dispatcher);
        }
        self.clock = now.next();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<()> {
        let floor_count = self.dispatcher.config().floor_count;

        // ── Phase 1: hall calls ───────────────────────────────────────────
        let due: Vec<HallCall> = self.plan.drain_due(now).iter().map(|c| c.call).collect();
        for call in due {
            self.hall_call(call, observer)?;
        }
        if let Some(call) = self.traffic.as_mut().and_then(|t| t.hall_call(floor_count)) {
            self.hall_call(call, observer)?;
        }

        // ── Phase 2: cars, in fleet order ─────────────────────────────────
        for i in 0..self.cars.len() {
            if let Some(event) = self.cars[i].begin_tick() {
                self.dispatch(event, observer)?;
            }

            let Some(event) = self.cars[i].finish_tick() else {
                continue;
            };
            self.dispatch(event, observer)?;

            if let DispatchEvent::StoppedAtFloor { elevator, floor } = event {
                self.stats.stops += 1;
                if let Some(to) = self.traffic.as_mut().and_then(|t| t.cab_call(floor, floor_count)) {
                    self.stats.cab_calls += 1;
                    self.dispatch(DispatchEvent::CabButton { elevator, floor: to }, observer)?;
                }
            }
        }

        // ── Phase 3: periodic hook ────────────────────────────────────────
        self.dispatcher.update(self.config.tick_secs());
        Ok(())
    }

    fn hall_call<O: SimObserver>(&mut self, call: HallCall, observer: &mut O) -> SimResult<()> {
        self.stats.hall_calls += 1;
        self.dispatch(
            DispatchEvent::FloorButton {
                floor:     call.floor,
                direction: call.direction,
            },
            observer,
        )
    }

    fn dispatch<O: SimObserver>(&mut self, event: DispatchEvent, observer: &mut O) -> SimResult<()> {
        trace!("{}: {event}", self.clock);
        self.dispatcher.handle(event, &mut self.cars)?;
        self.stats.events += 1;
        observer.on_event(self.clock, &event);
        Ok(())
    }
}
