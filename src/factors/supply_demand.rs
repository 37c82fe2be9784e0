//! Supply-demand factor: sustained foreign + institutional net buying.
//!
//! Raw metric: mean of the last `min_flow_sessions` sessions' combined net
//! buy value, divided by the average daily traded value over the trailing
//! `flow_window`. A ratio of +0.05 means major investors absorbed 5% of a
//! typical day's turnover, per session, over the recent stretch.
//!
//! Score: 50 at neutral flow, +400 points per unit of ratio, clamped to
//! [0, 100], with a +10 bonus when the latest session shows foreign and
//! institutional buyers on the same side.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::SupplyDemand;

    if snapshot.flows.len() < config.min_flow_sessions {
        return FactorResult::invalid(kind);
    }

    let traded_values: Vec<f64> = snapshot.candles.iter().map(|c| c.traded_value()).collect();
    let avg_value = match math::sma(&traded_values, config.flow_window) {
        Some(v) if v > 0.0 => v,
        _ => return FactorResult::invalid(kind),
    };

    let recent = &snapshot.flows[snapshot.flows.len() - config.min_flow_sessions..];
    let ratios: Vec<f64> = recent.iter().map(|f| f.combined() / avg_value).collect();
    let raw = match math::mean(&ratios) {
        Some(r) if r.is_finite() => r,
        _ => return FactorResult::invalid(kind),
    };

    let mut score = 50.0 + raw * 400.0;

    // Simultaneous foreign + institution net buy on the latest session.
    if let Some(latest) = snapshot.flows.last() {
        if latest.foreign_value > 0.0 && latest.institution_value > 0.0 {
            score += 10.0;
        }
    }

    FactorResult::valid(kind, raw, score)
}
