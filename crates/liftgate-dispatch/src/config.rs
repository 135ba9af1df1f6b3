//! Dispatcher configuration.

use crate::{DispatchError, DispatchResult};

/// Building shape and dispatch policy knobs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// Number of floors; valid floors are `0..floor_count`.  Also the
    /// distance assigned to busy cars by the closest-car selector.
    pub floor_count: u32,

    /// Number of cars in the fleet.
    pub elevator_count: u32,

    /// Drop both hall calls at a floor when a car reports stopping there.
    ///
    /// Off by default: requests then only leave the registry through
    /// passing-floor pickup, and a car that was sent to a call by the idle
    /// flow keeps being sent back to it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub clear_request_on_stop: bool,
}

impl DispatchConfig {
    pub fn new(floor_count: u32, elevator_count: u32) -> Self {
        Self {
            floor_count,
            elevator_count,
            clear_request_on_stop: false,
        }
    }

    pub fn with_clear_request_on_stop(mut self, clear: bool) -> Self {
        self.clear_request_on_stop = clear;
        self
    }

    pub fn validate(&self) -> DispatchResult<()> {
        if self.floor_count < 2 {
            return Err(DispatchError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floor_count
            )));
        }
        if self.elevator_count == 0 {
            return Err(DispatchError::Config("the fleet needs at least one elevator".into()));
        }
        if i32::try_from(self.floor_count).is_err() {
            return Err(DispatchError::Config(format!(
                "floor_count {} does not fit a floor number",
                self.floor_count
            )));
        }
        Ok(())
    }
}
