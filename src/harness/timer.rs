//! Wall-clock timing of a single call.

use std::time::Instant;

/// Run `op` exactly once and return its output with the elapsed seconds.
///
/// Uses [`Instant`], so the measurement is immune to system clock changes.
/// An error from `op` is returned as-is, without a timing.
pub fn time_call<T, E, F>(op: F) -> Result<(T, f64), E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let output = op()?;
    let elapsed = start.elapsed();
    Ok((output, elapsed.as_secs_f64()))
}
