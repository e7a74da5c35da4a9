use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance, ignoring teleporters.
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance(other) == 1
    }

    pub fn offset(&self, direction: Direction) -> Position {
        Position::new(self.x + direction.dx, self.y + direction.dy)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-step move. Each component is in `-1..=1` and at most one is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const NONE: Direction = Direction { dx: 0, dy: 0 };
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };

    pub const CARDINALS: [Direction; 4] =
        [Direction::NORTH, Direction::EAST, Direction::SOUTH, Direction::WEST];

    pub fn delta(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn is_none(&self) -> bool {
        *self == Direction::NONE
    }

    pub fn as_str_name(&self) -> &'static str {
        match (self.dx, self.dy) {
            (0, -1) => "NORTH",
            (1, 0) => "EAST",
            (0, 1) => "SOUTH",
            (-1, 0) => "WEST",
            _ => "NONE",
        }
    }
}
