//! Shared helpers for the measuring commands.

use crate::config::HarnessConfig;
use crate::measure::{Function, Measurement, Precision, measure};
use crate::samples::{grid_f32, grid_f64};

/// Build the grid for each selected precision and measure every function
/// on it.
pub fn run_measurements(config: &HarnessConfig) -> Vec<Measurement> {
    let mut measurements = Vec::new();
    for &precision in config.precision.precisions() {
        let turns = config.turns(precision);
        tracing::info!(
            %precision,
            samples = 2 * config.samples + 1,
            turns,
            repeats = config.repeats,
            "generating grid"
        );
        match precision {
            Precision::F64 => {
                let xs = grid_f64(config.samples, turns);
                for function in Function::ALL {
                    measurements.push(measure(function, &xs, config.repeats));
                }
            }
            Precision::F32 => {
                let xs = grid_f32(config.samples, turns as f32);
                for function in Function::ALL {
                    measurements.push(measure(function, &xs, config.repeats));
                }
            }
        }
    }
    measurements
}
