//! Trial runner: repeats a timed operation for one configuration cell.
//!
//! A failing run is logged and recorded as [`TrialResult::Failed`]; the
//! remaining runs still execute. Only a broken round trip (decrypted output
//! differing from the input) stops the runner, since it means every later
//! measurement is meaningless.

use core::fmt::Display;
use tracing::warn;

use crate::error::{BenchError, CryptoError, Result};
use crate::harness::timer::time_call;
use crate::types::{ConfigCell, TrialResult};

/// Time `op` `runs` times in sequence.
///
/// Results are in run order; run `i` (1-based) is element `i - 1`.
pub fn run_trials<T, E, F>(cell: &ConfigCell, runs: usize, mut op: F) -> Vec<TrialResult>
where
    E: Display,
    F: FnMut() -> core::result::Result<T, E>,
{
    (1..=runs)
        .map(|run| match time_call(&mut op) {
            Ok((_, secs)) => TrialResult::Measured(secs),
            Err(e) => {
                warn!(cell = %cell, run, error = %e, "trial failed");
                TrialResult::Failed
            }
        })
        .collect()
}

/// A forward operation paired with its inverse (encrypt/decrypt,
/// sign/verify). Both halves are timed separately; `prepare` is not timed.
pub trait RoundTrip {
    /// Per-run state created outside the timed region (fresh key, nonce).
    type Prepared;
    /// Output of the forward half (ciphertext, signature).
    type Forward;
    /// Output of the inverse half (recovered plaintext, verification).
    type Inverse;

    fn prepare(&self) -> core::result::Result<Self::Prepared, CryptoError>;

    fn forward(&self, prepared: &Self::Prepared) -> core::result::Result<Self::Forward, CryptoError>;

    fn inverse(
        &self,
        prepared: &Self::Prepared,
        forward: &Self::Forward,
    ) -> core::result::Result<Self::Inverse, CryptoError>;

    /// Whether the inverse output reproduces the original input.
    fn round_trips(&self, _inverse: &Self::Inverse) -> bool {
        true
    }
}

/// Timings of both halves of a round trip, index-aligned by run.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundTripTrials {
    pub forward: Vec<TrialResult>,
    pub inverse: Vec<TrialResult>,
}

/// Run `trip` `runs` times, timing the forward and inverse halves.
///
/// If preparation or the forward half fails, both halves of that run are
/// recorded as failed. A failed inverse only marks the inverse run.
///
/// # Errors
/// [`BenchError::IntegrityViolation`] as soon as an inverse output does not
/// reproduce the input.
pub fn run_round_trips<R: RoundTrip>(
    trip: &R,
    forward_cell: &ConfigCell,
    inverse_cell: &ConfigCell,
    runs: usize,
) -> Result<RoundTripTrials> {
    let mut forward = Vec::with_capacity(runs);
    let mut inverse = Vec::with_capacity(runs);

    for run in 1..=runs {
        let prepared = match trip.prepare() {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!(cell = %forward_cell, run, error = %e, "trial setup failed");
                forward.push(TrialResult::Failed);
                inverse.push(TrialResult::Failed);
                continue;
            }
        };

        let output = match time_call(|| trip.forward(&prepared)) {
            Ok((output, secs)) => {
                forward.push(TrialResult::Measured(secs));
                output
            }
            Err(e) => {
                warn!(cell = %forward_cell, run, error = %e, "trial failed");
                forward.push(TrialResult::Failed);
                inverse.push(TrialResult::Failed);
                continue;
            }
        };

        match time_call(|| trip.inverse(&prepared, &output)) {
            Ok((recovered, secs)) => {
                if !trip.round_trips(&recovered) {
                    return Err(BenchError::IntegrityViolation {
                        cell: inverse_cell.to_string(),
                        run,
                    });
                }
                inverse.push(TrialResult::Measured(secs));
            }
            Err(e) => {
                warn!(cell = %inverse_cell, run, error = %e, "trial failed");
                inverse.push(TrialResult::Failed);
            }
        }
    }

    Ok(RoundTripTrials { forward, inverse })
}
