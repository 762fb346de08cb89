//! Tracing subscriber setup for the benchmark binary.
//!
//! Log level comes from `RUST_LOG`, falling back to `crypto_bench=info`.
//! Per-run failures go out at `warn`; suite and plot milestones at `info`.
//! Result tables and progress banners are printed to stdout separately.

use tracing::info;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "crypto_bench=info";

/// Install the global compact fmt subscriber. Call once per process.
///
/// # Errors
/// If a global subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()?;

    info!(version = crate::VERSION, "crypto-bench logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // Another test may already have installed a subscriber; either way
        // the second call in this test must fail rather than panic.
        let _ = init_tracing();
        assert!(init_tracing().is_err());
    }
}
