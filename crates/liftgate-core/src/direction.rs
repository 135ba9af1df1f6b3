//! Travel / call-button direction shared by the registry, the scheduler and
//! the host harness.

/// Which way a call button points, or which way a car is working.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Towards higher floor numbers.  New cars start out working upwards.
    #[default]
    Up,
    /// Towards lower floor numbers.
    Down,
}

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Lower-case label, used for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up"   => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other  => Err(crate::LiftError::Parse(format!(
                "invalid direction {other:?}: expected \"up\" or \"down\""
            ))),
        }
    }
}
