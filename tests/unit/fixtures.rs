//! Shared snapshot builders for the unit tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use swingrix::models::{Candle, FlowRecord, Fundamentals, MarketSnapshot};

/// Trading session `i` of the fixture calendar.
pub fn day(i: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 2).unwrap() + Duration::days(i as i64)
}

/// Steadily rising closes: 10_000 + 50 per session, constant volume.
pub fn uptrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 10_000.0 + 50.0 * i as f64;
            Candle::new(day(i), close - 30.0, close + 50.0, close - 60.0, close, 100_000.0)
        })
        .collect()
}

/// Steadily falling closes: 13_000 - 50 per session.
pub fn downtrend_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let close = 13_000.0 - 50.0 * i as f64;
            Candle::new(day(i), close + 30.0, close + 60.0, close - 50.0, close, 100_000.0)
        })
        .collect()
}

/// Sideways closes at 10_000 with a 200-point daily range.
pub fn flat_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| Candle::new(day(i), 9_970.0, 10_100.0, 9_900.0, 10_000.0, 100_000.0))
        .collect()
}

/// Snapshot whose quote follows the candle history.
pub fn snapshot_from_candles(ticker: &str, candles: Vec<Candle>) -> MarketSnapshot {
    let price = candles.last().map(|c| c.close).unwrap_or(0.0);
    let prev_close = if candles.len() >= 2 {
        candles[candles.len() - 2].close
    } else {
        price
    };
    MarketSnapshot::new(ticker, format!("{ticker} Corp"), price, prev_close).with_candles(candles)
}

/// Three sessions of identical foreign/institutional flows aligned with the
/// end of the candle history.
pub fn recent_flows(last_session: usize, foreign: f64, institution: f64) -> Vec<FlowRecord> {
    (0..3)
        .map(|i| FlowRecord {
            date: day(last_session - 2 + i),
            foreign_value: foreign,
            institution_value: institution,
        })
        .collect()
}

/// A snapshot that scores well on every factor: 70 rising sessions, a volume
/// spike on the latest bar, heavy two-sided net buying and a cheap book
/// multiple with a dividend.
pub fn healthy_snapshot(ticker: &str) -> MarketSnapshot {
    let mut candles = uptrend_candles(70);
    candles.last_mut().unwrap().volume = 250_000.0;
    snapshot_from_candles(ticker, candles)
        .with_flows(recent_flows(69, 8.0e8, 6.0e8))
        .with_fundamentals(Fundamentals {
            per: Some(9.0),
            pbr: Some(0.8),
            dividend_yield: Some(3.0),
        })
}

/// A snapshot too thin to score: a handful of bars, no flows.
pub fn sparse_snapshot(ticker: &str) -> MarketSnapshot {
    snapshot_from_candles(ticker, uptrend_candles(5)).with_fundamentals(Fundamentals {
        per: None,
        pbr: Some(1.2),
        dividend_yield: None,
    })
}
