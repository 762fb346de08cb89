//! Benchmark runner CLI.
//!
//! Runs the key-generation, symmetric, RSA-OAEP and signature suites in
//! that order, writes their CSV files, then renders every plot.
//!
//! Takes no arguments. Configure through the environment:
//!   CRYPTO_BENCH_CONFIG=bench.json   JSON file with any subset of settings
//!   CRYPTO_BENCH_RUNS=5              trials per cell
//!   CRYPTO_BENCH_OUT_DIR=out         output directory
//!   RUST_LOG=crypto_bench=debug      log filter

use std::process::ExitCode;

use crypto_bench::{logging, pipeline, BenchConfig};
use tracing::error;

fn main() -> ExitCode {
    if let Err(e) = logging::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = match BenchConfig::from_env().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "benchmark run aborted");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
