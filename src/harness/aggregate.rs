//! Reduction of per-run timings to one representative value.

use crate::types::TrialResult;

/// Mean of the successful runs, excluding the first successful one.
///
/// Failures are filtered out *before* the warm-up sample is dropped, so a
/// failed first run does not cost an extra sample. With one or zero
/// successful runs there is nothing left to average and `None` is returned.
pub fn mean_excluding_first(runs: &[TrialResult]) -> Option<f64> {
    let valid: Vec<f64> = runs.iter().filter_map(TrialResult::seconds).collect();
    if valid.len() <= 1 {
        return None;
    }
    let rest = &valid[1..];
    Some(rest.iter().sum::<f64>() / rest.len() as f64)
}
