//! # Sort Benchmark Suite - Main Entry Point
//!
//! Orchestrates a full benchmark run:
//! 1. **Initialize logging**: structured logging with tracing, colorized for
//!    user-facing output
//! 2. **Parse arguments**: command-line configuration via clap
//! 3. **Validate configuration**: invalid settings are rejected before any
//!    measurement begins
//! 4. **Run the matrix**: every selected algorithm against every input size
//! 5. **Write reports**: the CSV results table, plus an optional JSON report
//!
//! All errors propagate as `anyhow::Result` and terminate the run; this is an
//! offline measurement tool, so there is no retry or degraded mode.

use anyhow::Result;
use clap::Parser;
use sort_benchmark::{
    benchmark::{BenchmarkConfig, BenchmarkRunner},
    cli::Args,
    logging::ColorizedFormatter,
    results::ResultsManager,
};
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG takes precedence; otherwise --verbose selects the debug level
    // with per-cell progress lines.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if args.verbose { "debug" } else { "info" })
        });
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .event_format(ColorizedFormatter)
        .init();

    info!("Starting Sort Benchmark Suite");

    // Validation happens here, before any input is generated or timed.
    let config = BenchmarkConfig::from_args(&args)?;

    let mut results_manager = ResultsManager::new(&args.output_file, config.clone());
    if let Some(ref json_file) = args.json_output {
        info!("Enabling JSON report output to: {:?}", json_file);
        results_manager.enable_json_output(json_file);
    }

    let runner = BenchmarkRunner::new(config)?;
    let table = runner.run()?;

    results_manager.set_table(table);
    results_manager.finalize()?;

    info!("Sort Benchmark Suite completed successfully");
    Ok(())
}
