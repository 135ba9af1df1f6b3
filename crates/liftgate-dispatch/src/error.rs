use liftgate_core::{ElevatorId, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0} is not part of the fleet")]
    UnknownElevator(ElevatorId),

    #[error("{floor} is outside a building of {floor_count} floors")]
    FloorOutOfRange {
        floor:       Floor,
        floor_count: u32,
    },

    #[error("host passed {got} cars but the dispatcher manages {expected}")]
    FleetMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("dispatch configuration error: {0}")]
    Config(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
