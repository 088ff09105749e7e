//! Accuracy gate: fail when any worst-case error exceeds its bound.

use crate::commands::common::run_measurements;
use crate::config::RunArgs;
use crate::error::HarnessError;
use crate::report::Report;
use clap::Args;

/// Check worst-case error against the configured bounds.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    run: RunArgs,
}

/// Run the check command.
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = args.run.resolve()?;
    // Timing is not reported here.
    config.repeats = 1;

    let measurements = run_measurements(&config);
    let report = Report {
        config: &config,
        measurements: &measurements,
    };
    println!("Accuracy check");
    println!("==============");
    print!("{}", report.to_table(false));

    let mut failure = None;
    for m in &measurements {
        let bound = config.max_error(m.precision);
        if m.exceeds(bound) {
            tracing::warn!(
                function = %m.function,
                precision = %m.precision,
                max_error = m.max_error,
                worst_input = m.worst_input,
                bound,
                "error bound exceeded"
            );
            failure.get_or_insert(HarnessError::ThresholdExceeded {
                function: m.function,
                precision: m.precision,
                error: m.max_error,
                bound,
            });
        }
    }

    match failure {
        Some(err) => Err(err.into()),
        None => {
            println!();
            println!("All within bounds.");
            Ok(())
        }
    }
}
