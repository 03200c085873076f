// src/error.rs

use std::io;
use thiserror::Error;

/// Errors raised while carving a map or laying out its markers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarveError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("generation stalled after {attempts} blocked attempts with {remaining} tunnels left")]
    GenerationFailed { attempts: usize, remaining: usize },
}

impl CarveError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        CarveError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a generator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] CarveError),
}
