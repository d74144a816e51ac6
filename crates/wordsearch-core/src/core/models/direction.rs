use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight straight reading directions in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// Row and column step as `(dr, dc)`.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    pub fn from_delta(dr: isize, dc: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Right => "right",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::DownRight => "down-right",
            Direction::DownLeft => "down-left",
            Direction::UpRight => "up-right",
            Direction::UpLeft => "up-left",
        };
        f.write_str(name)
    }
}
