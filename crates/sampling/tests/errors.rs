//! Integration tests for SamplingError variants.

use tau_sampling::{BudgetConfig, SamplingError, required_sample_size};

#[test]
fn error_empty_population() {
    let config = BudgetConfig::new(1);
    let result = required_sample_size(0, &config);
    assert!(matches!(result, Err(SamplingError::EmptyPopulation)));
}

#[test]
fn error_invalid_k() {
    let config = BudgetConfig::new(0);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidK { k: 0 })));
}

#[test]
fn error_k_exceeds_population() {
    let config = BudgetConfig::new(20);
    let result = required_sample_size(10, &config);
    assert!(matches!(
        result,
        Err(SamplingError::KExceedsPopulation { k: 20, n: 10 })
    ));
}

#[test]
fn error_tau_zero() {
    let config = BudgetConfig::new(1).with_tau(0.0);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidTau { .. })));
}

#[test]
fn error_tau_above_hundred() {
    let config = BudgetConfig::new(1).with_tau(100.01);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidTau { .. })));
}

#[test]
fn error_tau_nan() {
    let config = BudgetConfig::new(1).with_tau(f64::NAN);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidTau { .. })));
}

#[test]
fn error_alpha_zero() {
    let config = BudgetConfig::new(1).with_alpha(0.0);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidAlpha { .. })));
}

#[test]
fn error_alpha_above_one() {
    // No silent clamping: 1.05 is rejected, not treated as certainty
    let config = BudgetConfig::new(1).with_alpha(1.05);
    let result = required_sample_size(100, &config);
    assert!(matches!(
        result,
        Err(SamplingError::InvalidAlpha { alpha }) if alpha == 1.05
    ));
}

#[test]
fn error_alpha_nan() {
    let config = BudgetConfig::new(1).with_alpha(f64::NAN);
    let result = required_sample_size(100, &config);
    assert!(matches!(result, Err(SamplingError::InvalidAlpha { .. })));
}
