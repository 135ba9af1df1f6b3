//! `DestinationQueue`: the ordered list of floors one car will stop at.

use liftgate_core::Floor;

/// Ordered stops for one car.  Never holds the same floor twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DestinationQueue {
    floors: Vec<Floor>,
}

impl DestinationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue from `floors`, keeping the first occurrence of repeats.
    pub fn from_floors(floors: impl IntoIterator<Item = Floor>) -> Self {
        let mut queue = Self::new();
        for floor in floors {
            queue.push_unique(floor);
        }
        queue
    }

    /// The next stop, if any.
    #[inline]
    pub fn head(&self) -> Option<Floor> {
        self.floors.first().copied()
    }

    /// Append `floor` unless it is already queued.  Returns `true` if added.
    pub fn push_unique(&mut self, floor: Floor) -> bool {
        if self.floors.contains(&floor) {
            return false;
        }
        self.floors.push(floor);
        true
    }

    /// Remove `floor` wherever it sits.  Returns `true` if it was queued.
    pub fn remove(&mut self, floor: Floor) -> bool {
        match self.floors.iter().position(|&f| f == floor) {
            Some(i) => {
                self.floors.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace the stored order.  Callers pass a permutation of the current
    /// floors; the scheduler is the only one doing so.
    pub(crate) fn replace(&mut self, floors: Vec<Floor>) {
        debug_assert_eq!(floors.len(), self.floors.len());
        self.floors = floors;
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
