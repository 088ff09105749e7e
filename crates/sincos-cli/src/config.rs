//! Harness configuration.
//!
//! Settings come from built-in defaults, then an optional TOML file, then
//! command-line flags, each layer overriding the previous one.
//!
//! ```toml
//! samples = 1048576      # half-count: the grid has 2·samples + 1 points
//! turns_f64 = 4.0        # f64 grid spans ±turns_f64 full turns
//! turns_f32 = 16.0       # f32 grid spans ±turns_f32 full turns
//! precision = "both"     # "f32", "f64" or "both"
//! repeats = 3            # timing passes, best one is reported
//! max_error_f64 = 1e-9   # `check` bound for f64
//! max_error_f32 = 1e-6   # `check` bound for f32
//! ```

use crate::error::HarnessError;
use crate::measure::Precision;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default half-count of the sample grid.
pub const DEFAULT_SAMPLES: usize = 1024 * 1024;

/// Largest accepted half-count; grid indices stay within `i32`.
pub const MAX_SAMPLES: usize = i32::MAX as usize;

/// Which precisions a run covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionSelection {
    /// Single precision only
    F32,
    /// Double precision only
    F64,
    /// Both, f64 first
    #[default]
    Both,
}

impl PrecisionSelection {
    /// Precisions to run, in report order.
    pub fn precisions(self) -> &'static [Precision] {
        match self {
            PrecisionSelection::F32 => &[Precision::F32],
            PrecisionSelection::F64 => &[Precision::F64],
            PrecisionSelection::Both => &[Precision::F64, Precision::F32],
        }
    }
}

/// Resolved settings for a `bench` or `check` run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Half-count of the sample grid.
    pub samples: usize,
    /// Turns covered by the f64 grid on each side of zero.
    pub turns_f64: f64,
    /// Turns covered by the f32 grid on each side of zero.
    pub turns_f32: f64,
    /// Precisions to measure.
    pub precision: PrecisionSelection,
    /// Timing passes per measurement.
    pub repeats: u32,
    /// Accuracy bound for f64 in `check`.
    pub max_error_f64: f64,
    /// Accuracy bound for f32 in `check`.
    pub max_error_f32: f64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            turns_f64: 4.0,
            turns_f32: 16.0,
            precision: PrecisionSelection::Both,
            repeats: 3,
            max_error_f64: 1e-9,
            max_error_f32: 1e-6,
        }
    }
}

impl HarnessConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, HarnessError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| HarnessError::read_config(path, e))?;
        Self::from_toml(&text)
    }

    /// Reject settings that would produce an empty or meaningless run.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if self.samples == 0 {
            return Err(HarnessError::invalid("samples must be at least 1"));
        }
        if self.samples > MAX_SAMPLES {
            return Err(HarnessError::invalid(format!(
                "samples must be at most {MAX_SAMPLES}, got {}",
                self.samples
            )));
        }
        if self.repeats == 0 {
            return Err(HarnessError::invalid("repeats must be at least 1"));
        }
        for (name, turns) in [("turns_f64", self.turns_f64), ("turns_f32", self.turns_f32)] {
            if !turns.is_finite() || turns <= 0.0 {
                return Err(HarnessError::invalid(format!(
                    "{name} must be a positive finite number, got {turns}"
                )));
            }
        }
        for (name, bound) in [
            ("max_error_f64", self.max_error_f64),
            ("max_error_f32", self.max_error_f32),
        ] {
            if bound.is_nan() || bound < 0.0 {
                return Err(HarnessError::invalid(format!(
                    "{name} must be non-negative, got {bound}"
                )));
            }
        }
        Ok(())
    }

    /// Grid span in turns for `precision`.
    pub fn turns(&self, precision: Precision) -> f64 {
        match precision {
            Precision::F32 => self.turns_f32,
            Precision::F64 => self.turns_f64,
        }
    }

    /// `check` bound for `precision`.
    pub fn max_error(&self, precision: Precision) -> f64 {
        match precision {
            Precision::F32 => self.max_error_f32,
            Precision::F64 => self.max_error_f64,
        }
    }
}

/// Run options shared by `bench` and `check`.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// TOML config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Half-count of the sample grid (grid has 2·N + 1 points)
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Turns covered on each side of zero, for both precisions
    #[arg(long)]
    pub turns: Option<f64>,

    /// Precisions to measure
    #[arg(short, long, value_enum)]
    pub precision: Option<PrecisionSelection>,

    /// Timing passes per measurement (best is reported)
    #[arg(short, long)]
    pub repeats: Option<u32>,
}

impl RunArgs {
    /// Merge defaults, the config file and flags into a validated config.
    pub fn resolve(&self) -> Result<HarnessConfig, HarnessError> {
        let mut config = match &self.config {
            Some(path) => HarnessConfig::load(path)?,
            None => HarnessConfig::default(),
        };
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(turns) = self.turns {
            config.turns_f64 = turns;
            config.turns_f32 = turns;
        }
        if let Some(precision) = self.precision {
            config.precision = precision;
        }
        if let Some(repeats) = self.repeats {
            config.repeats = repeats;
        }
        config.validate()?;
        Ok(config)
    }
}
