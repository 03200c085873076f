// src/carver/params.rs

use serde::Deserialize;

use crate::error::CarveError;

pub const DEFAULT_DIMENSION: usize = 5;
pub const DEFAULT_MAX_TUNNELS: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 3;
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Parameters passed to [`GridCarver`](super::GridCarver).
///
/// `CarveParams::default()` reproduces the classic 5x5 map with three tunnels of
/// at most three cells each. Start from it and override what you need:
///
/// ```
/// use random_walker::carver::CarveParams;
///
/// let params = CarveParams {
///     dimension: 40,
///     max_tunnels: 60,
///     max_length: 8,
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarveParams {
    /// Side length of the square grid.
    pub dimension: usize,

    /// Number of tunnels that must each open at least one cell.
    pub max_tunnels: usize,

    /// Upper bound on the cells opened by a single tunnel.
    pub max_length: usize,

    /// How many blocked tunnel attempts in a row are tolerated before giving up.
    pub max_attempts: usize,
}

impl Default for CarveParams {
    fn default() -> Self {
        CarveParams {
            dimension: DEFAULT_DIMENSION,
            max_tunnels: DEFAULT_MAX_TUNNELS,
            max_length: DEFAULT_MAX_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CarveParams {
    pub fn new(dimension: usize, max_tunnels: usize, max_length: usize) -> Self {
        CarveParams {
            dimension,
            max_tunnels,
            max_length,
            ..Default::default()
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn validate(&self) -> Result<(), CarveError> {
        let checks = [
            ("dimension", self.dimension),
            ("max_tunnels", self.max_tunnels),
            ("max_length", self.max_length),
            ("max_attempts", self.max_attempts),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(CarveError::invalid(name, "must be greater than zero"));
            }
        }
        if self.dimension.checked_mul(self.dimension).is_none() {
            return Err(CarveError::invalid(
                "dimension",
                format!("{} x {} cells overflows usize", self.dimension, self.dimension),
            ));
        }
        Ok(())
    }
}
