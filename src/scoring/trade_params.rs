//! Target and stop-loss derivation from composite score and volatility.
//!
//! Stop distance scales with the ATR percentage (wider stops for more
//! volatile names) inside [`stop_min_pct`, `stop_max_pct`]. The target is
//! the stop distance times a reward multiple that grows with the composite
//! score (`reward_base + score/100`, clamped), itself bounded by
//! [`target_min_pct`, `target_max_pct`]. With the defaults, a composite of
//! 72 and a 2.5% ATR on a 50,000 quote yields a 47,500 stop and a 54,000
//! target. Prices are rounded to whole currency units.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::TradeParams;

/// Derive trade parameters. `None` when volatility could not be estimated —
/// both prices are omitted rather than defaulted to implausible values.
pub fn derive_trade_params(
    price: f64,
    composite_score: f64,
    atr_pct: Option<f64>,
    config: &ScreeningConfig,
) -> Option<TradeParams> {
    let atr_pct = atr_pct?;
    if price <= 0.0 || !atr_pct.is_finite() || atr_pct <= 0.0 {
        return None;
    }

    let stop_pct =
        (atr_pct * config.stop_atr_mult).clamp(config.stop_min_pct, config.stop_max_pct);
    let reward = (config.reward_base + composite_score / 100.0)
        .clamp(config.reward_min, config.reward_max);
    let target_pct = (stop_pct * reward).clamp(config.target_min_pct, config.target_max_pct);

    let stop_loss_price = (price * (1.0 - stop_pct / 100.0)).round();
    let target_price = (price * (1.0 + target_pct / 100.0)).round();

    // Whole-unit rounding must not collapse the bracket around the entry.
    if !(stop_loss_price < price && price < target_price) {
        return None;
    }

    Some(TradeParams {
        target_price,
        stop_loss_price,
        target_return_pct: math::round1((target_price / price - 1.0) * 100.0),
        stop_return_pct: math::round1((stop_loss_price / price - 1.0) * 100.0),
    })
}
