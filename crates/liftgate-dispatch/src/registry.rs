//! `RequestRegistry`: outstanding hall calls, one set per direction.
//!
//! Each set is a small insertion-ordered `Vec` rather than a hash set: a
//! building has tens of floors, and insertion order is the canonical order
//! the closest-floor selector walks when breaking distance ties.

use liftgate_core::{Direction, Floor};

/// Pending up / down pickup requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestRegistry {
    up:   Vec<Floor>,
    down: Vec<Floor>,
}

impl RequestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hall call.  Returns `false` if it was already pending.
    pub fn add(&mut self, floor: Floor, direction: Direction) -> bool {
        let set = self.set_mut(direction);
        if set.contains(&floor) {
            return false;
        }
        set.push(floor);
        true
    }

    /// Drop a hall call.  Returns `false` if it was not pending.
    pub fn remove(&mut self, floor: Floor, direction: Direction) -> bool {
        let set = self.set_mut(direction);
        match set.iter().position(|&f| f == floor) {
            Some(i) => {
                set.remove(i);
                true
            }
            None => false,
        }
    }

    /// Drop the calls in both directions at `floor`; returns how many went.
    pub fn clear_floor(&mut self, floor: Floor) -> usize {
        usize::from(self.remove(floor, Direction::Up)) + usize::from(self.remove(floor, Direction::Down))
    }

    pub fn contains(&self, floor: Floor, direction: Direction) -> bool {
        self.pending(direction).contains(&floor)
    }

    /// Pending floors for `direction`, in the order they were pressed.
    pub fn pending(&self, direction: Direction) -> &[Floor] {
        match direction {
            Direction::Up   => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Every floor with a pending call in either direction, each listed once:
    /// down calls first, then up calls not already present.
    pub fn pending_union(&self) -> Vec<Floor> {
        let mut union = self.down.clone();
        for &floor in &self.up {
            if !union.contains(&floor) {
                union.push(floor);
            }
        }
        union
    }

    /// Total `(floor, direction)` entries.
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    fn set_mut(&mut self, direction: Direction) -> &mut Vec<Floor> {
        match direction {
            Direction::Up   => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}
