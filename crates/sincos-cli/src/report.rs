//! Report formatting.

use crate::config::HarnessConfig;
use crate::measure::Measurement;
use serde::Serialize;
use std::fmt::Write;

/// A full run: the settings used and one measurement per pair.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// Resolved settings.
    pub config: &'a HarnessConfig,
    /// Measurements in run order.
    pub measurements: &'a [Measurement],
}

impl Report<'_> {
    /// Pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable table, one row per measurement.
    pub fn to_table(&self, with_timing: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Grid: 2·{} + 1 points, ±{} turns (f64), ±{} turns (f32)",
            self.config.samples, self.config.turns_f64, self.config.turns_f32
        );
        let _ = writeln!(out);

        if with_timing {
            let _ = writeln!(
                out,
                "  {:8}  {:>4}  {:>22}  {:>12}  {:>12}  {:>7}",
                "Function", "Prec", "Max error", "Fast (ns)", "Libm (ns)", "Speedup"
            );
            let _ = writeln!(
                out,
                "  {:8}  {:>4}  {:>22}  {:>12}  {:>12}  {:>7}",
                "--------", "----", "---------", "---------", "---------", "-------"
            );
        } else {
            let _ = writeln!(
                out,
                "  {:8}  {:>4}  {:>22}  {:>14}",
                "Function", "Prec", "Max error", "Bound"
            );
            let _ = writeln!(
                out,
                "  {:8}  {:>4}  {:>22}  {:>14}",
                "--------", "----", "---------", "-----"
            );
        }

        for m in self.measurements {
            if with_timing {
                let _ = writeln!(
                    out,
                    "  {:8}  {:>4}  {:>22.16}  {:>12}  {:>12}  {:>6.2}x",
                    m.function.name(),
                    m.precision.name(),
                    m.max_error,
                    m.fast_ns,
                    m.reference_ns,
                    m.speedup()
                );
            } else {
                let _ = writeln!(
                    out,
                    "  {:8}  {:>4}  {:>22.16}  {:>14e}",
                    m.function.name(),
                    m.precision.name(),
                    m.max_error,
                    self.config.max_error(m.precision)
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{Function, Precision};

    fn sample() -> Vec<Measurement> {
        vec![
            Measurement {
                function: Function::Sin,
                precision: Precision::F64,
                samples: 3,
                max_error: 1.5e-15,
                worst_input: 0.5,
                fast_ns: 100,
                reference_ns: 400,
            },
            Measurement {
                function: Function::Sincos,
                precision: Precision::F32,
                samples: 3,
                max_error: 6e-8,
                worst_input: -1.0,
                fast_ns: 50,
                reference_ns: 75,
            },
        ]
    }

    #[test]
    fn table_lists_every_measurement() {
        let config = HarnessConfig::default();
        let measurements = sample();
        let report = Report {
            config: &config,
            measurements: &measurements,
        };
        let table = report.to_table(true);
        assert!(table.contains("Speedup"));
        assert!(table.contains("sin "));
        assert!(table.contains("sincos"));
        assert!(table.contains("4.00x"));
        assert!(table.contains("1.50x"));
    }

    #[test]
    fn accuracy_table_shows_bounds() {
        let config = HarnessConfig::default();
        let measurements = sample();
        let report = Report {
            config: &config,
            measurements: &measurements,
        };
        let table = report.to_table(false);
        assert!(table.contains("Bound"));
        assert!(table.contains("1e-9"));
        assert!(table.contains("1e-6"));
        assert!(!table.contains("Speedup"));
    }

    #[test]
    fn json_roundtrips_measurements() {
        let config = HarnessConfig::default();
        let measurements = sample();
        let report = Report {
            config: &config,
            measurements: &measurements,
        };
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["config"]["samples"], 1024 * 1024);
        assert_eq!(value["measurements"][0]["function"], "sin");
        assert_eq!(value["measurements"][1]["precision"], "f32");
        let back: Vec<Measurement> =
            serde_json::from_value(value["measurements"].clone()).unwrap();
        assert_eq!(back, measurements);
    }
}
