// src/render/mod.rs
pub mod markers;

pub use markers::{Marker, MarkerField, DEFAULT_DISTANCE_RANGE};
