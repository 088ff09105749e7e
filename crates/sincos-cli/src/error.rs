//! Error types for the harness.

use crate::measure::{Function, Precision};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or checking a harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Failed to read the config file
    #[error("failed to read config '{path}': {source}")]
    ReadConfig {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Accuracy check failed
    #[error("{function} ({precision}) max error {error:e} exceeds bound {bound:e}")]
    ThresholdExceeded {
        /// Function that failed.
        function: Function,
        /// Precision it was measured at.
        precision: Precision,
        /// Measured worst-case absolute error.
        error: f64,
        /// Configured bound.
        bound: f64,
    },
}

impl HarnessError {
    /// Create a read config error.
    pub fn read_config(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::ReadConfig {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config error.
    pub fn invalid(message: impl Into<String>) -> Self {
        HarnessError::InvalidConfig(message.into())
    }
}
