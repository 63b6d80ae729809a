//! Experience levels derived from points.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level earned by accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    /// Points needed to reach each level above 1.
    const THRESHOLDS: [(u64, u8); 2] = [(300, 3), (100, 2)];

    pub fn for_points(points: u64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| points >= *min)
            .map(|(_, level)| Level(*level))
            .unwrap_or(Level(1))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_point_thresholds() {
        assert_eq!(Level::for_points(0).value(), 1);
        assert_eq!(Level::for_points(99).value(), 1);
        assert_eq!(Level::for_points(100).value(), 2);
        assert_eq!(Level::for_points(299).value(), 2);
        assert_eq!(Level::for_points(300).value(), 3);
        assert_eq!(Level::for_points(10_000).value(), 3);
    }
}
