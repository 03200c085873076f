// src/map/grid.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;

/// A cell address, `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Square tile map stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `dimension` x `dimension` grid of walls. Callers validate that
    /// `dimension * dimension` fits in a `usize` first.
    pub(crate) fn new(dimension: usize) -> Self {
        Grid {
            dimension,
            cells: vec![Cell::Wall; dimension * dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.dimension && pos.col < self.dimension
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.dimension + pos.col)
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Sets a cell. Returns `false` (and changes nothing) if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_open)
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let dimension = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_open())
            .map(move |(i, _)| Position::new(i / dimension, i % dimension))
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero size; an empty grid simply has no rows.
        self.cells.chunks(self.dimension.max(1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
