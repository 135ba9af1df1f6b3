//! Typed events the host feeds into the dispatcher.

use std::fmt;

use liftgate_core::{Direction, ElevatorId, Floor};

/// Something happened in the building.
///
/// Every car-originated event carries the car's id; hall calls carry the
/// floor and the button pressed.  Route them through
/// [`Dispatcher::handle`][crate::Dispatcher::handle].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchEvent {
    /// A hall call button was pressed on `floor`.
    FloorButton {
        floor:     Floor,
        direction: Direction,
    },

    /// A passenger inside `elevator` pressed the button for `floor`.
    CabButton {
        elevator: ElevatorId,
        floor:    Floor,
    },

    /// `elevator` is about to pass `floor` without stopping.
    PassingFloor {
        elevator: ElevatorId,
        floor:    Floor,
    },

    /// `elevator` stopped at `floor` and removed it from its stop list.
    StoppedAtFloor {
        elevator: ElevatorId,
        floor:    Floor,
    },

    /// `elevator` has an empty stop list.
    Idle { elevator: ElevatorId },
}

impl DispatchEvent {
    /// The originating car, or `None` for hall calls.
    pub fn elevator(&self) -> Option<ElevatorId> {
        match *self {
            DispatchEvent::FloorButton { .. } => None,
            DispatchEvent::CabButton { elevator, .. }
            | DispatchEvent::PassingFloor { elevator, .. }
            | DispatchEvent::StoppedAtFloor { elevator, .. }
            | DispatchEvent::Idle { elevator } => Some(elevator),
        }
    }
}

impl fmt::Display for DispatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchEvent::FloorButton { floor, direction } => {
                write!(f, "hall call {direction} at {floor}")
            }
            DispatchEvent::CabButton { elevator, floor } => {
                write!(f, "{elevator} cab call to {floor}")
            }
            DispatchEvent::PassingFloor { elevator, floor } => {
                write!(f, "{elevator} passing {floor}")
            }
            DispatchEvent::StoppedAtFloor { elevator, floor } => {
                write!(f, "{elevator} stopped at {floor}")
            }
            DispatchEvent::Idle { elevator } => write!(f, "{elevator} idle"),
        }
    }
}
