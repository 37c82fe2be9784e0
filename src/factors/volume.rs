//! Volume-anomaly factor: today's volume vs its trailing average.
//!
//! Raw metric: volume ratio (latest session / `volume_window` SMA). The band
//! mapping rewards elevated participation up to roughly 3x; on a down day
//! the score is damped, since heavy volume into weakness reads as
//! distribution rather than accumulation.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::Volume;
    let volumes = snapshot.volumes();

    let volume_ma = match math::sma(&volumes, config.volume_window) {
        Some(v) if v > 0.0 => v,
        _ => return FactorResult::invalid(kind),
    };
    let today = match snapshot.last_candle() {
        Some(c) if c.volume >= 0.0 => c.volume,
        _ => return FactorResult::invalid(kind),
    };

    let raw = today / volume_ma;
    if !raw.is_finite() {
        return FactorResult::invalid(kind);
    }

    let mut score = if raw <= 0.5 {
        20.0
    } else if raw <= 1.0 {
        math::lerp_band(raw, 0.5, 1.0, 20.0, 50.0)
    } else if raw <= 2.0 {
        math::lerp_band(raw, 1.0, 2.0, 50.0, 85.0)
    } else if raw <= 3.0 {
        math::lerp_band(raw, 2.0, 3.0, 85.0, 100.0)
    } else {
        100.0
    };

    if snapshot.daily_return_pct().is_some_and(|r| r < 0.0) {
        score *= 0.6;
    }

    FactorResult::valid(kind, raw, score)
}
