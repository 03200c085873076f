// src/lib.rs

pub mod carver;
pub mod config;
pub mod error;
pub mod map;
pub mod render;
pub mod utils;

pub use carver::{carve, CarveParams, Carving, GridCarver, RandomSource, Tunnel};
pub use config::GeneratorConfig;
pub use error::{CarveError, ConfigError};
pub use map::{Cell, Direction, Grid, Position};
pub use render::{Marker, MarkerField};
