//! Floor numbers and the floor-distance metric used by every selector.

use std::fmt;

/// A floor number.  Floor 0 is the ground floor.
///
/// Signed so that `current - target` never underflows; the dispatcher only
/// accepts floors in `0..floor_count`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// The ground floor, also the fallback target when nothing is pending.
    pub const GROUND: Floor = Floor(0);

    /// Absolute number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// `true` if `self` lies in `0..floor_count`.
    #[inline]
    pub fn in_building(self, floor_count: u32) -> bool {
        self.0 >= 0 && (self.0 as u32) < floor_count
    }

    /// The next floor on the way to `target` (`self` if already there).
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        Floor(self.0 + (target.0 - self.0).signum())
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
