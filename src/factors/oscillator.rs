//! Oscillator factor: 14-session RSI with Wilder smoothing.
//!
//! Raw metric: the RSI value itself. The constructive band
//! [`rsi_band_low`, `rsi_band_high`] is inclusive on both edges and maps to
//! [80, 100] (peaking at the band center); readings below the band ramp up
//! from 0 at RSI 15, readings above ramp down toward 0 at RSI 97. Both
//! oversold and overbought extremes therefore score poorly.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::Oscillator;
    let closes = snapshot.closes();

    let rsi = match math::wilder_rsi(&closes, config.rsi_period) {
        Some(v) if v.is_finite() => v,
        _ => return FactorResult::invalid(kind),
    };

    let low = config.rsi_band_low;
    let high = config.rsi_band_high;
    let score = if rsi >= low && rsi <= high {
        let center = (low + high) / 2.0;
        let half = (high - low) / 2.0;
        80.0 + 20.0 * (1.0 - (rsi - center).abs() / half)
    } else if rsi < low {
        math::lerp_band(rsi, 15.0, low, 0.0, 80.0)
    } else {
        math::lerp_band(rsi, high, 97.0, 80.0, 0.0)
    };

    FactorResult::valid(kind, rsi, score)
}
