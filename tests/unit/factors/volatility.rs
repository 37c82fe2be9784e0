//! Unit tests for the volatility factor

use approx::assert_relative_eq;
use swingrix::config::ScreeningConfig;
use swingrix::factors::volatility::{self, atr_percent};
use swingrix::models::Candle;

use crate::fixtures::{day, flat_candles, snapshot_from_candles};

fn wide_range_candles(count: usize, half_range: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            Candle::new(
                day(i),
                10_000.0,
                10_000.0 + half_range,
                10_000.0 - half_range,
                10_000.0,
                100_000.0,
            )
        })
        .collect()
}

#[test]
fn test_insufficient_history_is_invalid() {
    let snapshot = snapshot_from_candles("005380", flat_candles(14));
    let result = volatility::evaluate(&snapshot, &ScreeningConfig::default());
    assert!(!result.valid);
    assert!(atr_percent(&snapshot, &ScreeningConfig::default()).is_none());
}

#[test]
fn test_nonpositive_price_has_no_atr() {
    let mut snapshot = snapshot_from_candles("005380", flat_candles(20));
    snapshot.price = 0.0;
    assert!(atr_percent(&snapshot, &ScreeningConfig::default()).is_none());
}

#[test]
fn test_steady_two_percent_range() {
    // Every bar spans 9_900..10_100 around a 10_000 close: true range 200,
    // ATR 2% of price. That lands in the sweet spot of the band.
    let snapshot = snapshot_from_candles("005380", flat_candles(20));
    let config = ScreeningConfig::default();
    assert_relative_eq!(atr_percent(&snapshot, &config).unwrap(), 2.0);

    let result = volatility::evaluate(&snapshot, &config);
    assert!(result.valid);
    assert_relative_eq!(result.raw, 2.0);
    // lerp of 2.0 across [1.0, 2.5] -> [70, 100]
    assert_relative_eq!(result.score, 90.0, max_relative = 1e-12);
}

#[test]
fn test_dead_quiet_name_scores_low() {
    let snapshot = snapshot_from_candles("005380", wide_range_candles(20, 15.0));
    let result = volatility::evaluate(&snapshot, &ScreeningConfig::default());
    assert!(result.valid);
    assert_relative_eq!(result.raw, 0.3, max_relative = 1e-12);
    // lerp of 0.3 across [0.0, 0.5] -> [10, 40]
    assert_relative_eq!(result.score, 28.0, max_relative = 1e-12);
}

#[test]
fn test_turbulent_name_scores_floor() {
    let snapshot = snapshot_from_candles("005380", wide_range_candles(20, 600.0));
    let result = volatility::evaluate(&snapshot, &ScreeningConfig::default());
    assert!(result.valid);
    assert_relative_eq!(result.raw, 12.0, max_relative = 1e-12);
    assert_relative_eq!(result.score, 10.0);
}
