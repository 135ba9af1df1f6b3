//! `SimCar`: a car that moves one floor per tick.

use liftgate_core::{Direction, ElevatorId, Floor};
use liftgate_dispatch::{DispatchEvent, ElevatorCar};

/// Harness car.  Owns its position and its copy of the stop list; the
/// dispatcher replaces the list through [`ElevatorCar`].
#[derive(Clone, Debug)]
pub struct SimCar {
    pub id: ElevatorId,

    pub floor: Floor,

    /// Stops in service order, as last committed by the dispatcher minus
    /// those already served.
    pub stops: Vec<Floor>,

    /// Indicator set by the dispatcher.
    pub direction: Direction,

    /// Floors moved since the start of the run.
    pub floors_travelled: u64,

    /// Stops made since the start of the run.
    pub stops_made: u64,

    /// `Idle` has been reported for the current empty spell.
    idle_reported: bool,
}

impl SimCar {
    pub fn new(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            floor,
            stops:            Vec::new(),
            direction:        Direction::Up,
            floors_travelled: 0,
            stops_made:       0,
            idle_reported:    false,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.stops.is_empty()
    }

    /// First half of a tick: announce the floor the car is about to pass.
    ///
    /// Emitted while the car is still on its current floor, so a pickup
    /// scheduled in response sorts ahead of the current head.
    pub fn begin_tick(&self) -> Option<DispatchEvent> {
        let head = *self.stops.first()?;
        if head == self.floor {
            return None;
        }
        let next = self.floor.step_toward(head);
        (next != head).then_some(DispatchEvent::PassingFloor {
            elevator: self.id,
            floor:    next,
        })
    }

    /// Second half of a tick: move one floor toward the head and stop there
    /// if it is reached.  An empty list reports `Idle` once per empty spell,
    /// one tick after the last stop.
    pub fn finish_tick(&mut self) -> Option<DispatchEvent> {
        let Some(&head) = self.stops.first() else {
            if self.idle_reported {
                return None;
            }
            self.idle_reported = true;
            return Some(DispatchEvent::Idle { elevator: self.id });
        };

        if head != self.floor {
            self.floor = self.floor.step_toward(head);
            self.floors_travelled += 1;
        }
        if self.floor != head {
            return None;
        }

        self.stops.remove(0);
        self.stops_made += 1;
        Some(DispatchEvent::StoppedAtFloor {
            elevator: self.id,
            floor:    head,
        })
    }
}

impl ElevatorCar for SimCar {
    fn current_floor(&self) -> Floor {
        self.floor
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn commit_destination_queue(&mut self, queue: &[Floor]) {
        self.stops.clear();
        self.stops.extend_from_slice(queue);
        if !self.stops.is_empty() {
            self.idle_reported = false;
        }
    }
}
