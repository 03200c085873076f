// src/config.rs

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::carver::params::{
    DEFAULT_DIMENSION, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_LENGTH, DEFAULT_MAX_TUNNELS,
};
use crate::carver::CarveParams;
use crate::error::{CarveError, ConfigError};
use crate::render::DEFAULT_DISTANCE_RANGE;

/// Everything needed to generate and lay out a map, as read from a JSON file.
///
/// Every field is optional; missing ones take the defaults of a 5x5 map with
/// three tunnels of up to three cells.
///
/// ```
/// use random_walker::config::GeneratorConfig;
///
/// let config = GeneratorConfig::from_json_str(r#"{ "seed": 7, "dimension": 24 }"#).unwrap();
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.carve_params().dimension, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the walk. When absent a fresh one is drawn per run.
    pub seed: Option<u64>,
    pub dimension: usize,
    pub max_tunnels: usize,
    pub max_length: usize,
    pub max_attempts: usize,
    /// World-space side length covered by the marker field.
    pub distance_range: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            seed: None,
            dimension: DEFAULT_DIMENSION,
            max_tunnels: DEFAULT_MAX_TUNNELS,
            max_length: DEFAULT_MAX_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            distance_range: DEFAULT_DISTANCE_RANGE,
        }
    }
}

impl GeneratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading generator config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn carve_params(&self) -> CarveParams {
        CarveParams::new(self.dimension, self.max_tunnels, self.max_length)
            .with_max_attempts(self.max_attempts)
    }

    pub fn validate(&self) -> Result<(), CarveError> {
        self.carve_params().validate()?;
        if !self.distance_range.is_finite() || self.distance_range <= 0.0 {
            return Err(CarveError::invalid(
                "distance_range",
                format!("must be a positive number, got {}", self.distance_range),
            ));
        }
        Ok(())
    }
}
