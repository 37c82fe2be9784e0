//! Volatility/risk factor from the average true range.
//!
//! Raw metric: ATR over `atr_period` sessions as a percentage of the current
//! price. The band mapping prefers a tradeable middle (about 1-4% daily
//! range) over both dead-quiet and turbulent names. The raw value doubles as
//! the input for target/stop sizing downstream.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::Volatility;

    let atr_pct = match atr_percent(snapshot, config) {
        Some(v) => v,
        None => return FactorResult::invalid(kind),
    };

    let score = if atr_pct < 0.5 {
        math::lerp_band(atr_pct, 0.0, 0.5, 10.0, 40.0)
    } else if atr_pct < 1.0 {
        math::lerp_band(atr_pct, 0.5, 1.0, 40.0, 70.0)
    } else if atr_pct <= 2.5 {
        math::lerp_band(atr_pct, 1.0, 2.5, 70.0, 100.0)
    } else if atr_pct <= 4.0 {
        math::lerp_band(atr_pct, 2.5, 4.0, 100.0, 70.0)
    } else if atr_pct <= 8.0 {
        math::lerp_band(atr_pct, 4.0, 8.0, 70.0, 20.0)
    } else {
        10.0
    };

    FactorResult::valid(kind, atr_pct, score)
}

/// ATR as a percentage of the current price. `None` when there is not enough
/// history or the quote is unusable.
pub fn atr_percent(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> Option<f64> {
    let candles = &snapshot.candles;
    if candles.len() < config.atr_period + 1 || snapshot.price <= 0.0 {
        return None;
    }

    let mut true_ranges = Vec::with_capacity(candles.len() - 1);
    for i in 1..candles.len() {
        true_ranges.push(math::true_range(
            candles[i].high,
            candles[i].low,
            candles[i - 1].close,
        ));
    }

    let atr = math::sma(&true_ranges, config.atr_period)?;
    let atr_pct = atr / snapshot.price * 100.0;
    (atr_pct.is_finite() && atr_pct >= 0.0).then_some(atr_pct)
}
