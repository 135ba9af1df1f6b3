//! The host-side car contract and the dispatcher's per-car state.

use liftgate_core::{Direction, ElevatorId, Floor};

use crate::DestinationQueue;

/// One elevator car as exposed by the host (simulator, hardware driver, …).
///
/// The host owns position and motion.  The dispatcher reads the position and
/// hands back a reordered destination queue plus a direction flag; it never
/// moves a car directly.
///
/// Cars are passed to every [`Dispatcher`][crate::Dispatcher] entry point as
/// a slice in fleet order, so `cars[id.index()]` is the car for `id`.
///
/// # Example
///
/// ```rust,ignore
/// struct Cab { floor: Floor, stops: Vec<Floor>, going: Direction }
///
/// impl ElevatorCar for Cab {
///     fn current_floor(&self) -> Floor { self.floor }
///     fn set_direction(&mut self, direction: Direction) { self.going = direction; }
///     fn commit_destination_queue(&mut self, queue: &[Floor]) {
///         self.stops = queue.to_vec();
///     }
/// }
/// ```
pub trait ElevatorCar {
    /// The floor the car is at or last passed.
    fn current_floor(&self) -> Floor;

    /// Set the car's direction flag (indicator lamps, passing-floor hints).
    fn set_direction(&mut self, direction: Direction);

    /// Replace the car's stop list with `queue` and re-derive its motion
    /// from the new head.
    fn commit_destination_queue(&mut self, queue: &[Floor]);
}

/// What the dispatcher owns about one car.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElevatorState {
    pub id: ElevatorId,

    /// Working direction recorded at the last schedule call.  Decides which
    /// hall calls the car picks up while passing floors.
    pub direction: Direction,

    pub queue: DestinationQueue,
}

impl ElevatorState {
    pub fn new(id: ElevatorId) -> Self {
        Self {
            id,
            direction: Direction::Up,
            queue:     DestinationQueue::new(),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Selector input: a car's position and whether it has nothing queued.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CarStatus {
    pub id:            ElevatorId,
    pub current_floor: Floor,
    pub idle:          bool,
}
