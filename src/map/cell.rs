// src/map/cell.rs
use serde::{Deserialize, Serialize};

/// State of a single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }

    /// Character used by the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }
}
