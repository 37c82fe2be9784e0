//! Factor calculators.
//!
//! Each calculator is a pure function from a snapshot to one [`FactorResult`]
//! and never fails loudly: malformed or insufficient data produces an invalid
//! result (NaN raw) that the composite scorer excludes and renormalizes
//! around. Score mappings are piecewise-linear bands documented per module.

pub mod fundamental;
pub mod momentum;
pub mod oscillator;
pub mod supply_demand;
pub mod volatility;
pub mod volume;

use crate::config::ScreeningConfig;
use crate::models::{FactorSet, MarketSnapshot};

/// Evaluate all six factors for one snapshot, in reporting order.
pub fn evaluate_all(snapshot: &MarketSnapshot, config: &ScreeningConfig) -> FactorSet {
    FactorSet::new(vec![
        supply_demand::evaluate(snapshot, config),
        momentum::evaluate(snapshot, config),
        oscillator::evaluate(snapshot, config),
        volume::evaluate(snapshot, config),
        volatility::evaluate(snapshot, config),
        fundamental::evaluate(snapshot, config),
    ])
}
