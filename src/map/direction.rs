// src/map/direction.rs
use serde::{Deserialize, Serialize};

use super::Position;

/// One of the four cardinal moves, in (row-delta, col-delta) convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Sampling order used by the carver.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn is_perpendicular_to(self, other: Direction) -> bool {
        self.is_vertical() != other.is_vertical()
    }

    /// Moves `pos` one cell in this direction, or `None` if that leaves a
    /// `dimension` x `dimension` grid.
    pub fn step(self, pos: Position, dimension: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        if row < dimension && col < dimension {
            Some(Position::new(row, col))
        } else {
            None
        }
    }
}
