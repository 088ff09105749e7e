//! Sincos CLI - benchmark and accuracy harness for the fast trig functions.

mod commands;
mod config;
mod error;
mod measure;
mod report;
mod samples;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sincos")]
#[command(author, version, about = "Fast sin/cos benchmark and accuracy harness", long_about = None)]
struct Cli {
    /// Log measurement details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time the fast functions against libm and report worst-case error
    Bench(commands::bench::BenchArgs),

    /// Fail if any worst-case error exceeds its configured bound
    Check(commands::check::CheckArgs),

    /// Evaluate a single angle and show its reduction
    Eval(commands::eval::EvalArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Bench(args) => commands::bench::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Eval(args) => commands::eval::run(args),
    }
}
