//! `liftgate-core`: foundational types for the `liftgate` elevator dispatch
//! workspace.
//!
//! This crate is a dependency of every other `liftgate-*` crate.  It has no
//! `liftgate-*` dependencies and only `rand` and `thiserror` from outside,
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`                                          |
//! | [`floor`]       | `Floor`, floor distance                               |
//! | [`direction`]   | `Direction` (`Up` / `Down`)                           |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
