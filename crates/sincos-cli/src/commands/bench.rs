//! Fast path vs libm: timing and worst-case error.

use crate::commands::common::run_measurements;
use crate::config::RunArgs;
use crate::report::Report;
use clap::Args;

/// Time and compare the fast functions against libm.
#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Run the bench command.
pub fn run(args: BenchArgs) -> anyhow::Result<()> {
    let config = args.run.resolve()?;
    let measurements = run_measurements(&config);
    let report = Report {
        config: &config,
        measurements: &measurements,
    };

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("Fast sin/cos vs libm");
        println!("====================");
        print!("{}", report.to_table(true));
    }
    Ok(())
}
