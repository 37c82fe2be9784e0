//! Rule-based tag classification.
//!
//! Tags explain *why* a stock scored the way it did. Rules are independent
//! predicates evaluated in a fixed priority order; every rule that matches
//! emits its label, in that order, capped at `max_tags`. New rules slot into
//! the list without touching existing ones.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorSet, MarketSnapshot};

/// One classification rule.
pub trait TagRule: Send + Sync {
    fn label(&self) -> &'static str;
    fn matches(
        &self,
        snapshot: &MarketSnapshot,
        factors: &FactorSet,
        config: &ScreeningConfig,
    ) -> bool;
}

/// The default rule list, highest priority first.
pub fn default_rules() -> Vec<Box<dyn TagRule>> {
    vec![
        Box::new(DoubleNetBuy),
        Box::new(SupplySurge),
        Box::new(MaAligned),
        Box::new(BullishCandle),
        Box::new(Breakout),
        Box::new(VolumeSurge),
        Box::new(Pullback),
        Box::new(Overheated),
        Box::new(Undervalued),
    ]
}

/// Evaluate `rules` in order and collect matching labels, capped at
/// `config.max_tags`.
pub fn classify(
    snapshot: &MarketSnapshot,
    factors: &FactorSet,
    rules: &[Box<dyn TagRule>],
    config: &ScreeningConfig,
) -> Vec<String> {
    let mut tags = Vec::new();
    for rule in rules {
        if tags.len() >= config.max_tags {
            break;
        }
        if rule.matches(snapshot, factors, config) {
            tags.push(rule.label().to_string());
        }
    }
    tags
}

/// Foreign and institutional investors both net buyers on the latest
/// session, with a combined value above the configured floor.
struct DoubleNetBuy;

impl TagRule for DoubleNetBuy {
    fn label(&self) -> &'static str {
        "double_net_buy"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, config: &ScreeningConfig) -> bool {
        snapshot.flows.last().is_some_and(|f| {
            f.foreign_value > 0.0
                && f.institution_value > 0.0
                && f.combined() >= config.double_net_buy_min_value
        })
    }
}

/// Combined net buying above `supply_surge_ratio` of average turnover for
/// each of the last `supply_surge_sessions` sessions.
struct SupplySurge;

impl TagRule for SupplySurge {
    fn label(&self) -> &'static str {
        "supply_surge"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, config: &ScreeningConfig) -> bool {
        let sessions = config.supply_surge_sessions;
        if snapshot.flows.len() < sessions {
            return false;
        }
        let traded: Vec<f64> = snapshot.candles.iter().map(|c| c.traded_value()).collect();
        let avg_value = match math::sma(&traded, config.flow_window) {
            Some(v) if v > 0.0 => v,
            _ => return false,
        };
        snapshot.flows[snapshot.flows.len() - sessions..]
            .iter()
            .all(|f| f.combined() / avg_value > config.supply_surge_ratio)
    }
}

/// Short MA over mid MA over long MA.
struct MaAligned;

impl TagRule for MaAligned {
    fn label(&self) -> &'static str {
        "ma_aligned"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, config: &ScreeningConfig) -> bool {
        let closes = snapshot.closes();
        match (
            math::sma(&closes, config.ma_short),
            math::sma(&closes, config.ma_mid),
            math::sma(&closes, config.ma_long),
        ) {
            (Some(s), Some(m), Some(l)) => s > m && m > l,
            _ => false,
        }
    }
}

/// Strong up-day candle: body dominates the range on a sizable gain.
struct BullishCandle;

impl TagRule for BullishCandle {
    fn label(&self) -> &'static str {
        "bullish_candle"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, config: &ScreeningConfig) -> bool {
        let Some(candle) = snapshot.last_candle() else {
            return false;
        };
        let range = candle.high - candle.low;
        if range <= 0.0 || candle.close <= candle.open {
            return false;
        }
        let body = candle.close - candle.open;
        body / range >= config.bullish_body_ratio
            && snapshot
                .daily_return_pct()
                .is_some_and(|r| r >= config.bullish_min_return_pct)
    }
}

/// Close above the prior session's high.
struct Breakout;

impl TagRule for Breakout {
    fn label(&self) -> &'static str {
        "breakout"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, _: &ScreeningConfig) -> bool {
        let n = snapshot.candles.len();
        n >= 2 && snapshot.price > snapshot.candles[n - 2].high
    }
}

/// Volume at or above the spike ratio vs its trailing average.
struct VolumeSurge;

impl TagRule for VolumeSurge {
    fn label(&self) -> &'static str {
        "volume_surge"
    }

    fn matches(&self, _: &MarketSnapshot, factors: &FactorSet, config: &ScreeningConfig) -> bool {
        factors
            .raw(FactorKind::Volume)
            .is_some_and(|ratio| ratio >= config.volume_spike_ratio)
    }
}

/// RSI recovering out of the oversold zone while the mid MA still holds.
struct Pullback;

impl TagRule for Pullback {
    fn label(&self) -> &'static str {
        "pullback"
    }

    fn matches(&self, snapshot: &MarketSnapshot, factors: &FactorSet, config: &ScreeningConfig) -> bool {
        let Some(rsi) = factors.raw(FactorKind::Oscillator) else {
            return false;
        };
        if rsi < config.rsi_pullback_low || rsi >= config.rsi_band_low {
            return false;
        }
        let closes = snapshot.closes();
        math::sma(&closes, config.ma_mid).is_some_and(|ma| snapshot.price > ma)
    }
}

/// Overbought RSI or price extended far above trend.
struct Overheated;

impl TagRule for Overheated {
    fn label(&self) -> &'static str {
        "overheated"
    }

    fn matches(&self, _: &MarketSnapshot, factors: &FactorSet, config: &ScreeningConfig) -> bool {
        let hot_rsi = factors
            .raw(FactorKind::Oscillator)
            .is_some_and(|rsi| rsi > config.rsi_overheat);
        let extended = factors
            .raw(FactorKind::Momentum)
            .is_some_and(|disparity| disparity > config.disparity_overheat_pct);
        hot_rsi || extended
    }
}

/// Trading below book value.
struct Undervalued;

impl TagRule for Undervalued {
    fn label(&self) -> &'static str {
        "undervalued"
    }

    fn matches(&self, snapshot: &MarketSnapshot, _: &FactorSet, config: &ScreeningConfig) -> bool {
        snapshot
            .fundamentals
            .pbr
            .is_some_and(|pbr| pbr > 0.0 && pbr < config.undervalued_pbr)
    }
}
