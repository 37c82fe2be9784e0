//! Unit tests for the screening configuration

use approx::assert_relative_eq;
use swingrix::config::{FactorWeights, ScreeningConfig};

#[test]
fn test_default_weights_sum_to_one() {
    let weights = FactorWeights::default();
    assert!(weights.verify());
    assert_relative_eq!(weights.sum(), 1.0);
}

#[test]
fn test_unbalanced_weights_fail_verification() {
    let weights = FactorWeights {
        supply_demand: 0.5,
        ..FactorWeights::default()
    };
    assert!(!weights.verify());
}

#[test]
fn test_default_run_shape() {
    let config = ScreeningConfig::default();
    assert_eq!(config.top_n, 3);
    assert_eq!(config.min_valid_factors, 3);
    assert!(config.rsi_band_low < config.rsi_band_high);
    assert!(config.stop_min_pct < config.stop_max_pct);
    assert!(config.target_min_pct < config.target_max_pct);
    assert!(config.reward_min < config.reward_max);
}
