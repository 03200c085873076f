// src/map/mod.rs
pub mod cell;
pub mod direction;
pub mod grid;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::{Grid, Position};
