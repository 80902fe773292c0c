//! Property-based tests for the decay equation and the age solvers.

use chemage::{
    AgeConfig, AgeError, Sample, constants::YEARS_PER_MA, equivalent_th, find_age, find_ages,
    radiogenic_pb,
};
use proptest::prelude::*;

/// Solver settings tight enough to pin ages to a thousandth of a Ma.
fn precise() -> AgeConfig {
    AgeConfig {
        residual_tol_ppm: 1e-9,
        decimals: 3,
        ..AgeConfig::default()
    }
}

fn sample() -> impl Strategy<Value = Sample> {
    (0.0f64..50_000.0, 0.0f64..10_000.0, 0.0f64..5_000.0)
        .prop_map(|(th, u, pb)| Sample::new(th, u, pb))
}

// ── Decay equation ───────────────────────────────────────────────────

proptest! {
    /// Older grains never hold less radiogenic Pb.
    #[test]
    fn decay_equation_is_monotonic(
        th in 0.0f64..100_000.0,
        u in 0.0f64..20_000.0,
        a in 0.0f64..5e9,
        b in 0.0f64..5e9,
    ) {
        let (young, old) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(radiogenic_pb(young, th, u) <= radiogenic_pb(old, th, u));
    }

    /// Th* of a U-free grain is its own Th.
    #[test]
    fn equivalent_th_inverts_uranium_free_decay(
        th in 1.0f64..100_000.0,
        age_ma in 1.0f64..5000.0,
    ) {
        let pb = radiogenic_pb(age_ma * YEARS_PER_MA, th, 0.0);
        let recovered = equivalent_th(pb, age_ma);
        prop_assert!((recovered - th).abs() <= 1e-9 * th);
    }
}

// ── Age solver ───────────────────────────────────────────────────────

proptest! {
    /// Solving the decay equation recovers the age that produced the Pb.
    #[test]
    fn age_round_trips_through_decay_equation(
        th in 100.0f64..50_000.0,
        u in 0.0f64..10_000.0,
        age_ma in 1.0f64..5000.0,
    ) {
        let pb = radiogenic_pb(age_ma * YEARS_PER_MA, th, u);

        let age = find_age(&Sample::new(th, u, pb), &precise()).expect("reachable Pb");

        prop_assert!((age.age_ma - age_ma).abs() <= 1e-3, "{} vs {}", age.age_ma, age_ma);
    }

    /// Every solve ends within the guess budget, matched or explicitly failed.
    #[test]
    fn solver_terminates_with_a_verdict(sample in sample()) {
        let config = AgeConfig::default();
        let max_pb = sample.predicted_pb(config.max_age_yr);

        match find_age(&sample, &config) {
            Ok(age) => {
                prop_assert!(age.guesses <= config.max_guesses);
                prop_assert!(age.residual_ppm.abs() < config.residual_tol_ppm);
                prop_assert!((0.0..=5000.0).contains(&age.age_ma));
            }
            Err(err) => {
                prop_assert!(err.is_no_convergence(), "unexpected error: {err}");
                if let AgeError::NoConvergence { guesses, .. } = err {
                    prop_assert_eq!(guesses, config.max_guesses);
                }
            }
        }

        if sample.pb_ppm > max_pb + config.residual_tol_ppm {
            prop_assert!(find_age(&sample, &config).is_err());
        }
    }

    /// Batch output lines up with its input, failures included.
    #[test]
    fn batch_matches_individual_solves(samples in prop::collection::vec(sample(), 0..16)) {
        let config = AgeConfig::default();

        let ages = find_ages(&samples, &config);

        prop_assert_eq!(ages.len(), samples.len());
        for (sample, batched) in samples.iter().zip(&ages) {
            let single = find_age(sample, &config);
            match (batched, single) {
                (Ok(a), Ok(b)) => prop_assert_eq!(*a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                (a, b) => prop_assert!(false, "batch {a:?} but single {b:?}"),
            }
        }
    }
}
