//! Measurement harness.
//!
//! - Timer (`timer`): time one call on a monotonic clock
//! - Trial runner (`runner`): repeat a call N times, tolerating failures
//! - Aggregator (`aggregate`): reduce runs to a warm-up-free mean

pub mod aggregate;
pub mod runner;
pub mod timer;

pub use aggregate::mean_excluding_first;
pub use runner::{run_round_trips, run_trials, RoundTrip, RoundTripTrials};
pub use timer::time_call;
