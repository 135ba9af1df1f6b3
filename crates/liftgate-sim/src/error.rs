use liftgate_core::LiftError;
use liftgate_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match elevator count {expected}")]
    CarCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("call plan error: {0}")]
    CallPlan(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
