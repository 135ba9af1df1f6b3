//! Simulation observer trait for progress reporting and data collection.

use liftgate_core::Tick;
use liftgate_dispatch::{DispatchEvent, Dispatcher};

use crate::SimCar;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: event printer
///
/// ```rust,ignore
/// struct EventPrinter;
///
/// impl SimObserver for EventPrinter {
///     fn on_event(&mut self, tick: Tick, event: &DispatchEvent) {
///         println!("{tick}: {event}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the dispatcher has handled `event`.
    fn on_event(&mut self, _tick: Tick, _event: &DispatchEvent) {}

    /// Called at the end of each tick with the number of events handled.
    fn on_tick_end(&mut self, _tick: Tick, _events: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`)
    /// with read-only access to the cars and the dispatcher.
    fn on_snapshot(&mut self, _tick: Tick, _cars: &[SimCar], _dispatcher: &Dispatcher) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
