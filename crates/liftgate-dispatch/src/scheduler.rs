//! Direction-aware SCAN ordering of a car's destination queue.
//!
//! The disk-scheduling "elevator algorithm": every stop in the current sweep
//! direction is served before the car turns around.
//!
//! ```text
//! working direction Up,   current 3, stops {5, 1, 7}:  5 7 | 1
//!                         (> current ascending) then (<= current descending)
//! working direction Down, current 3, stops {1, 5, 2}:  2 1 | 5
//!                         (< current descending) then (>= current ascending)
//! ```
//!
//! A stop equal to the current floor lands in the *second* half in both
//! directions.

use liftgate_core::{Direction, Floor};

use crate::DestinationQueue;

/// Direction a car is working in, judged from its queue *before* a new stop
/// is added: `Up` if the head is above `current`, otherwise `Down`.
///
/// An empty queue has no head; such a car is taken to be working `Up`.
pub fn working_direction(current: Floor, queue: &DestinationQueue) -> Direction {
    match queue.head() {
        Some(head) if current < head => Direction::Up,
        Some(_)                      => Direction::Down,
        None                         => Direction::Up,
    }
}

/// Arrange `floors` as one SCAN sweep from `current` in `direction`.
pub fn scan_order(current: Floor, direction: Direction, floors: &[Floor]) -> Vec<Floor> {
    let (mut above, mut below): (Vec<Floor>, Vec<Floor>) = match direction {
        Direction::Up   => floors.iter().partition(|&&f| f > current),
        Direction::Down => floors.iter().partition(|&&f| f >= current),
    };
    above.sort_unstable();
    below.sort_unstable_by(|a, b| b.cmp(a));

    match direction {
        Direction::Up => {
            above.extend(below);
            above
        }
        Direction::Down => {
            below.extend(above);
            below
        }
    }
}

/// Add `target` to `queue` (if absent) and reorder it as a SCAN sweep.
///
/// Returns the working direction the reorder was based on; the caller
/// records it on the car.
pub fn schedule(current: Floor, queue: &mut DestinationQueue, target: Floor) -> Direction {
    let direction = working_direction(current, queue);
    queue.push_unique(target);
    let ordered = scan_order(current, direction, queue.as_slice());
    queue.replace(ordered);
    direction
}
