//! Unit tests for single-ticker evaluation

use approx::assert_relative_eq;
use swingrix::config::ScreeningConfig;
use swingrix::engine::evaluate_ticker;
use swingrix::models::SkipReason;
use swingrix::scoring::default_rules;

use crate::fixtures::{healthy_snapshot, sparse_snapshot};

#[test]
fn test_healthy_snapshot_scores_end_to_end() {
    let config = ScreeningConfig::default();
    let stock = evaluate_ticker(&healthy_snapshot("005930"), &default_rules(), &config).unwrap();

    assert_eq!(stock.ticker, "005930");
    assert!((0.0..=100.0).contains(&stock.composite_score));
    assert!(stock.composite_score > 70.0);
    assert_relative_eq!(stock.daily_return_pct, 0.4);
    assert_relative_eq!(stock.rsi.unwrap(), 100.0);
    assert_eq!(stock.tags.first().map(String::as_str), Some("double_net_buy"));
    assert!(stock.commentary.is_empty());

    let params = stock.trade_params.expect("volatility was computable");
    assert!(params.stop_loss_price < stock.price);
    assert!(params.target_price > stock.price);
}

#[test]
fn test_unusable_quote_is_data_unavailable() {
    let mut snapshot = healthy_snapshot("005930");
    snapshot.price = 0.0;
    let config = ScreeningConfig::default();
    let result = evaluate_ticker(&snapshot, &default_rules(), &config);
    assert_eq!(result.unwrap_err(), SkipReason::DataUnavailable);
}

#[test]
fn test_thin_history_is_too_few_valid_factors() {
    // Five bars and no flows: only the fundamental factor is computable.
    let config = ScreeningConfig::default();
    let result = evaluate_ticker(&sparse_snapshot("450080"), &default_rules(), &config);
    assert_eq!(result.unwrap_err(), SkipReason::TooFewValidFactors);
}

#[test]
fn test_composite_floor_filters_low_scores() {
    let mut config = ScreeningConfig::default();
    config.min_composite_score = 95.0;
    let result = evaluate_ticker(&healthy_snapshot("005930"), &default_rules(), &config);
    assert_eq!(result.unwrap_err(), SkipReason::BelowMinScore);
}

#[test]
#[should_panic(expected = "factor weights must sum to 1.0")]
fn test_unbalanced_weights_are_rejected_at_construction() {
    let mut config = ScreeningConfig::default();
    config.weights.supply_demand = 0.5;
    let provider = std::sync::Arc::new(swingrix::services::StaticSnapshotProvider::new(Vec::new()));
    let _ = swingrix::engine::ScreeningEngine::new(provider, config);
}

#[test]
fn test_identical_snapshots_produce_identical_records() {
    let config = ScreeningConfig::default();
    let rules = default_rules();
    let a = evaluate_ticker(&healthy_snapshot("005930"), &rules, &config).unwrap();
    let b = evaluate_ticker(&healthy_snapshot("005930"), &rules, &config).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
