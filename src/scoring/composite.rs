//! Weighted composite score with missing-factor renormalization.

use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorSet, SkipReason};

/// Combine the factor scores into one [0, 100] composite, rounded to one
/// decimal place.
///
/// Invalid factors are excluded and the remaining weights renormalized to
/// sum to 1.0 over the valid subset. Fewer than `min_valid_factors` valid
/// factors means the stock cannot be scored at all and is skipped.
pub fn composite_score(factors: &FactorSet, config: &ScreeningConfig) -> Result<f64, SkipReason> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut valid = 0usize;

    for result in factors.iter() {
        if !result.valid {
            continue;
        }
        let weight = weight_of(result.kind, config);
        weighted_sum += result.score * weight;
        weight_total += weight;
        valid += 1;
    }

    if valid < config.min_valid_factors || weight_total <= 0.0 {
        return Err(SkipReason::TooFewValidFactors);
    }

    let score = (weighted_sum / weight_total).clamp(0.0, 100.0);
    Ok(crate::common::math::round1(score))
}

fn weight_of(kind: FactorKind, config: &ScreeningConfig) -> f64 {
    let w = &config.weights;
    match kind {
        FactorKind::SupplyDemand => w.supply_demand,
        FactorKind::Momentum => w.momentum,
        FactorKind::Oscillator => w.oscillator,
        FactorKind::Volume => w.volume,
        FactorKind::Volatility => w.volatility,
        FactorKind::Fundamental => w.fundamental,
    }
}
