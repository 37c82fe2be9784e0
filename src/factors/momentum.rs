//! Momentum/trend factor from moving-average relationships.
//!
//! Raw metric: disparity of the current price vs the mid (20-session) MA, in
//! percent. Scoring starts from a neutral 40 and adds points for short-MA
//! over mid-MA, mid-MA over long-MA and price holding above the mid MA; a
//! moderate positive disparity earns up to 15 extra points while an extended
//! one (beyond `disparity_overheat_pct`) is penalized.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::Momentum;
    let closes = snapshot.closes();

    if closes.len() < config.ma_mid || snapshot.price <= 0.0 {
        return FactorResult::invalid(kind);
    }

    let ma_short = match math::sma(&closes, config.ma_short) {
        Some(v) => v,
        None => return FactorResult::invalid(kind),
    };
    let ma_mid = match math::sma(&closes, config.ma_mid) {
        Some(v) if v > 0.0 => v,
        _ => return FactorResult::invalid(kind),
    };
    // The long MA is optional: younger listings are scored without it.
    let ma_long = math::sma(&closes, config.ma_long);

    let raw = match math::pct_change(snapshot.price, ma_mid) {
        Some(d) => d,
        None => return FactorResult::invalid(kind),
    };

    let mut score = 40.0;

    if ma_short > ma_mid {
        score += 15.0;
    } else {
        score -= 10.0;
    }
    if let Some(ma_long) = ma_long {
        if ma_mid > ma_long {
            score += 10.0;
        }
    }
    if snapshot.price > ma_mid {
        score += 10.0;
    } else {
        score -= 10.0;
    }

    // Disparity sweet spot, then overheating penalty when extended.
    let optimal = config.disparity_optimal_pct;
    let overheat = config.disparity_overheat_pct;
    if raw > overheat {
        score -= (raw - overheat) * 2.0;
    } else if raw > optimal {
        score += math::lerp_band(raw, optimal, overheat, 15.0, 5.0);
    } else if raw > 0.0 {
        score += math::lerp_band(raw, 0.0, optimal, 0.0, 15.0);
    }

    FactorResult::valid(kind, raw, score)
}
