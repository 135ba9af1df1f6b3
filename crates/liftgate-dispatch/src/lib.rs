//! `liftgate-dispatch`: the elevator dispatch core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`registry`]   | `RequestRegistry`: pending up / down hall calls               |
//! | [`queue`]      | `DestinationQueue`: ordered, duplicate-free stop list         |
//! | [`scheduler`]  | Direction-aware scan ordering of a destination queue          |
//! | [`select`]     | Closest-car and closest-pending-floor selectors               |
//! | [`car`]        | `ElevatorCar` host contract, `ElevatorState`, `CarStatus`     |
//! | [`event`]      | `DispatchEvent`: typed messages from the host                 |
//! | [`dispatcher`] | `Dispatcher`: routes events to the dispatch entry points      |
//! | [`config`]     | `DispatchConfig`                                              |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                          |
//!
//! # Event flow
//!
//! ```text
//! FloorButton(f, dir) → registry.add → closest car → idle flow for that car
//! Idle(car)           → closest pending floor      → schedule onto car
//! PassingFloor(car,f) → f pending in car's working direction? → schedule + remove
//! CabButton(car, f)   → schedule onto car
//! StoppedAtFloor(car) → drop served floor from the dispatcher's queue copy
//! ```
//!
//! Every schedule call reorders the car's queue with a SCAN sweep and pushes
//! the result back to the host through [`ElevatorCar`].

pub mod car;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod queue;
pub mod registry;
pub mod scheduler;
pub mod select;


pub use car::{CarStatus, ElevatorCar, ElevatorState};
pub use config::DispatchConfig;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use event::DispatchEvent;
pub use queue::DestinationQueue;
pub use registry::RequestRegistry;
