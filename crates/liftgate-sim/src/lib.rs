//! `liftgate-sim`: a deterministic host for the liftgate dispatcher.
//!
//! Cars move one floor per tick, doors are instant and there are no
//! passengers, only button presses.  The harness exists to drive
//! [`liftgate_dispatch::Dispatcher`] through its event contract end to end.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Hall calls: scripted calls due this tick, then random traffic.
//!   ② Cars: for each car in fleet order:
//!                    begin: about to pass a floor?  → PassingFloor
//!                    finish: move one floor; at head → StoppedAtFloor
//!                            (+ random cab call);
//!                            empty and not yet reported → Idle
//!   ③ Update: Dispatcher::update(tick_secs)
//! ```
//!
//! Each event is handed to the dispatcher the moment it is produced, so a
//! `PassingFloor` pickup is visible to the same car's move in that tick.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use liftgate_core::SimConfig;
//! use liftgate_dispatch::DispatchConfig;
//! use liftgate_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), DispatchConfig::new(10, 2))
//!     .random_traffic(0.2, 0.5)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod calls;
pub mod car;
pub mod error;
pub mod observer;
pub mod sim;
pub mod trace;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use calls::{load_calls_csv, load_calls_reader, CallPlan, HallCall, RandomTraffic, ScheduledCall};
pub use car::SimCar;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, SimStats};
pub use trace::CsvTraceObserver;
