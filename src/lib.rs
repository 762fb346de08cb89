//! # crypto-bench
//!
//! Wall-clock benchmarks of symmetric ciphers, RSA-OAEP, digital signatures
//! and key-pair generation across security levels, written to CSV and
//! plotted as PNG line charts.
//!
//! The cryptography itself comes from `aes-gcm`, `chacha20poly1305` and
//! OpenSSL; this crate only times it. What it does own is the measurement
//! policy:
//!
//! - **Trials**: every configuration cell runs N times in sequence; a failing
//!   run becomes a failure marker and the rest still run
//! - **Aggregation**: failures are dropped, then the first remaining sample
//!   (warm-up), then the rest are averaged; one sample or fewer is no average
//! - **Omission**: a family with no parameter at a level produces no row
//! - **Integrity**: a decryption that does not return its input aborts the run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crypto_bench::{pipeline, BenchConfig};
//!
//! let config = BenchConfig::default().with_runs(5).with_output_dir("results");
//! pipeline::run(&config).unwrap();
//! ```
//!
//! ## Output
//!
//! `keygen_results.csv`, `symmetric_results.csv`, `rsa_enc_results.csv` and
//! `signature_results.csv`, plus six `plot_*.png` charts, in the output
//! directory.

pub mod config;
pub mod error;
pub mod harness;
pub mod logging;
pub mod params;
pub mod pipeline;
pub mod primitives;
pub mod report;
pub mod suites;
pub mod types;

#[cfg(feature = "plots")]
pub mod plot;

// Re-export the measurement core
pub use harness::{mean_excluding_first, run_round_trips, run_trials, time_call, RoundTrip};

// Re-export types
pub use config::BenchConfig;
pub use error::{BenchError, CryptoError, Result};
pub use params::{EcCurve, SecurityLevel};
pub use types::{AggregateResult, ConfigCell, Domain, Operation, ResultTable, TrialResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
