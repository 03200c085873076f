// src/carver/random.rs

use rand::Rng;

/// Source of uniform samples driving the walk.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded `StdRng` gives
/// reproducible maps. Tests can implement it directly to script exact walks.
pub trait RandomSource {
    /// A uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_f64() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}
