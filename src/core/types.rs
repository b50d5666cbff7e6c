//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Simulation tick counter
pub type Tick = u64;

/// Unique identifier for prey, allocated monotonically and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PreyId(pub u64);

/// Unique identifier for hunters, assigned once at generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HunterId(pub u32);

impl std::fmt::Display for PreyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "POKE-{}", self.0)
    }
}

impl std::fmt::Display for HunterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HUNTER-{}", self.0)
    }
}

/// Integer grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance, exact in integers
    pub fn distance_sq(&self, other: &Self) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }

    pub fn offset(&self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx,
            y: self.y + dir.dy,
        }
    }
}

/// Single-step displacement, each axis in {-1, 0, 1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const STAY: Direction = Direction { dx: 0, dy: 0 };

    /// Every step an actor may take, the zero move included
    pub const ALL: [Direction; 9] = [
        Direction { dx: -1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: -1 },
        Direction::STAY,
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: 1, dy: 1 },
    ];

    /// Greedy unit step from `from` toward `to`, per-axis sign of the difference
    pub fn toward(from: Position, to: Position) -> Self {
        Self {
            dx: (to.x - from.x).signum(),
            dy: (to.y - from.y).signum(),
        }
    }

    pub fn is_stay(&self) -> bool {
        *self == Self::STAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_sq() {
        let a = Position::new(0, 0);
        assert_eq!(a.distance_sq(&Position::new(1, 1)), 2);
        assert_eq!(a.distance_sq(&Position::new(3, -4)), 25);
        assert_eq!(a.distance_sq(&a), 0);
    }

    #[test]
    fn test_toward_covers_all_octants() {
        let origin = Position::new(5, 5);
        assert_eq!(Direction::toward(origin, Position::new(2, 1)), Direction { dx: -1, dy: -1 });
        assert_eq!(Direction::toward(origin, Position::new(5, 9)), Direction { dx: 0, dy: 1 });
        assert_eq!(Direction::toward(origin, Position::new(8, 5)), Direction { dx: 1, dy: 0 });
        assert!(Direction::toward(origin, origin).is_stay());
    }

    #[test]
    fn test_all_directions_include_stay() {
        assert!(Direction::ALL.iter().any(|d| d.is_stay()));
        assert_eq!(Direction::ALL.len(), 9);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PreyId(7).to_string(), "POKE-7");
        assert_eq!(HunterId(3).to_string(), "HUNTER-3");
    }
}
