//! Integration tests for the sampling-budget search.

use proptest::prelude::*;
use tau_sampling::{BudgetConfig, required_sample_size, success_probability};

/// 1000 points, 1% band, 95% confidence: the search converges at m = 299
/// (solving `1 - 0.99^m = 0.95`) and adds the one-draw margin.
#[test]
fn thousand_points_one_percent_band() {
    let config = BudgetConfig::new(1).with_tau(1.0).with_alpha(0.95);
    assert_eq!(required_sample_size(1000, &config).unwrap(), 300);
}

/// Certainty cannot be sampled for; only a full scan delivers alpha = 1.
#[test]
fn certainty_scans_everything() {
    let config = BudgetConfig::new(1).with_tau(1.0).with_alpha(1.0);
    assert_eq!(required_sample_size(500, &config).unwrap(), 500);
}

/// The default guarantee (5% band, 95% confidence) on 1000 points.
#[test]
fn default_guarantee_on_thousand_points() {
    let config = BudgetConfig::new(1);
    assert_eq!(required_sample_size(1000, &config).unwrap(), 60);
}

/// Raising alpha never lowers the budget.
#[test]
fn budget_monotone_in_alpha() {
    let mut prev = 0;
    for alpha in [0.5, 0.75, 0.9, 0.95, 0.99, 0.999] {
        let config = BudgetConfig::new(1).with_tau(1.0).with_alpha(alpha);
        let budget = required_sample_size(2000, &config).unwrap();
        assert!(
            budget >= prev,
            "budget dropped from {prev} to {budget} at alpha={alpha}"
        );
        prev = budget;
    }
}

/// Widening the band lowers the budget.
#[test]
fn wider_band_needs_fewer_samples() {
    let at_tau = |tau: f64| {
        let config = BudgetConfig::new(1).with_tau(tau).with_alpha(0.95);
        required_sample_size(1000, &config).unwrap()
    };
    let narrow = at_tau(1.0);
    let medium = at_tau(5.0);
    let wide = at_tau(20.0);
    assert!(
        narrow > medium && medium > wide,
        "expected {narrow} > {medium} > {wide}"
    );
}

/// The budget, minus its safety margin, already meets the confidence target
/// up to the search tolerance.
#[test]
fn budget_meets_confidence_within_tolerance() {
    for (n, k, tau, alpha) in [
        (1000, 1, 1.0, 0.95),
        (1000, 2, 10.0, 0.9),
        (500, 3, 20.0, 0.99),
        (2500, 1, 5.0, 0.8),
    ] {
        let config = BudgetConfig::new(k).with_tau(tau).with_alpha(alpha);
        let budget = required_sample_size(n, &config).unwrap();
        let t = config.rank_cutoff(n);

        assert!(budget <= n);
        let p = success_probability(n, k, budget - 1, t);
        assert!(
            p >= alpha - 1e-3,
            "n={n} k={k} tau={tau}: prob {p} at budget-1 misses alpha {alpha}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn prop_budget_in_range_and_tolerant(
        n in 100usize..3000,
        k in 1usize..5,
        tau in 5.0f64..50.0,
        alpha in 0.5f64..0.995,
    ) {
        let config = BudgetConfig::new(k).with_tau(tau).with_alpha(alpha);
        let budget = required_sample_size(n, &config).unwrap();

        prop_assert!(budget >= k, "budget {budget} below k {k}");
        prop_assert!(budget <= n, "budget {budget} above population {n}");

        // Away from the full-scan cap, the accepted probe itself already
        // clears alpha minus the search tolerance.
        if budget < n {
            let t = config.rank_cutoff(n);
            let p = success_probability(n, k, budget - 1, t);
            prop_assert!(
                p >= alpha - 1e-3,
                "prob {p} at budget-1 misses alpha {alpha}"
            );
        }
    }
}
