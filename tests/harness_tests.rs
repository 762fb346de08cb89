//! Property tests for the aggregation policy and the trial runner.

use crypto_bench::types::Operation;
use crypto_bench::{mean_excluding_first, run_trials, ConfigCell, TrialResult};
use proptest::prelude::*;

fn trial() -> impl Strategy<Value = TrialResult> {
    prop_oneof![
        1 => Just(TrialResult::Failed),
        3 => (1e-6f64..10.0).prop_map(TrialResult::Measured),
    ]
}

proptest! {
    /// With two or more successes, the mean covers every success but the first.
    #[test]
    fn mean_skips_exactly_first_success(runs in prop::collection::vec(trial(), 0..40)) {
        let valid: Vec<f64> = runs.iter().filter_map(TrialResult::seconds).collect();
        let mean = mean_excluding_first(&runs);

        if valid.len() <= 1 {
            prop_assert_eq!(mean, None);
        } else {
            let expected = valid[1..].iter().sum::<f64>() / (valid.len() - 1) as f64;
            let mean = mean.unwrap();
            prop_assert!((mean - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }

    /// Inserting failures anywhere never changes the aggregate.
    #[test]
    fn failures_are_transparent(
        samples in prop::collection::vec(1e-6f64..1.0, 0..20),
        gaps in prop::collection::vec(0usize..3, 0..20),
    ) {
        let clean: Vec<TrialResult> = samples.iter().copied().map(TrialResult::Measured).collect();
        let mut noisy = Vec::new();
        for (i, s) in samples.iter().enumerate() {
            let failures = gaps.get(i).copied().unwrap_or(0);
            noisy.extend(std::iter::repeat(TrialResult::Failed).take(failures));
            noisy.push(TrialResult::Measured(*s));
        }
        prop_assert_eq!(mean_excluding_first(&clean), mean_excluding_first(&noisy));
    }

    /// The mean lies within the range of the samples it averages.
    #[test]
    fn mean_is_bounded(samples in prop::collection::vec(1e-6f64..5.0, 2..30)) {
        let runs: Vec<TrialResult> = samples.iter().copied().map(TrialResult::Measured).collect();
        let mean = mean_excluding_first(&runs).unwrap();
        let rest = &samples[1..];
        let lo = rest.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = rest.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= lo - 1e-12 && mean <= hi + 1e-12);
    }
}

#[test]
fn test_scenario_all_succeed() {
    let runs = [0.05, 0.03, 0.04].map(TrialResult::Measured);
    let mean = mean_excluding_first(&runs).unwrap();
    assert!((mean - 0.035).abs() < 1e-12);
}

#[test]
fn test_scenario_failed_first_run() {
    let runs = [TrialResult::Failed, TrialResult::Measured(0.02), TrialResult::Measured(0.04)];
    let mean = mean_excluding_first(&runs).unwrap();
    assert!((mean - 0.04).abs() < 1e-12);
}

#[test]
fn test_runner_keeps_run_order() {
    let cell = ConfigCell::symmetric("AES-GCM", 128, Operation::Encrypt);
    let mut run = 0;
    let results = run_trials(&cell, 5, || {
        run += 1;
        if run % 2 == 0 {
            Err(format!("run {run} failed"))
        } else {
            Ok(run)
        }
    });
    let failed: Vec<bool> = results.iter().map(TrialResult::is_failed).collect();
    assert_eq!(failed, vec![false, true, false, true, false]);
    assert!(mean_excluding_first(&results).is_some());
}
