// src/carver/mod.rs
pub mod params;
pub mod random;
pub mod walker;

pub use params::CarveParams;
pub use random::RandomSource;
pub use walker::{carve, Carving, GridCarver, Tunnel};
