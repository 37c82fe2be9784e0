//! Fundamental factor: valuation bands on PBR with a dividend sweetener.
//!
//! Raw metric: PBR. Low book multiples score highest (downside protection
//! for a swing entry), fading through fair value toward expensive; a paid
//! dividend adds up to 10 bonus points. Absent or non-positive fundamentals
//! make the factor invalid, never zero.

use crate::common::math;
use crate::config::ScreeningConfig;
use crate::models::{FactorKind, FactorResult, MarketSnapshot};

pub fn evaluate(snapshot: &MarketSnapshot, _config: &ScreeningConfig) -> FactorResult {
    let kind = FactorKind::Fundamental;

    let pbr = match snapshot.fundamentals.pbr {
        Some(v) if v > 0.0 && v.is_finite() => v,
        _ => return FactorResult::invalid(kind),
    };

    let mut score = if pbr <= 1.0 {
        math::lerp_band(pbr, 0.0, 1.0, 100.0, 70.0)
    } else if pbr <= 1.5 {
        math::lerp_band(pbr, 1.0, 1.5, 70.0, 40.0)
    } else if pbr <= 3.0 {
        math::lerp_band(pbr, 1.5, 3.0, 40.0, 10.0)
    } else {
        10.0
    };

    if let Some(div) = snapshot.fundamentals.dividend_yield {
        if div > 0.0 && div.is_finite() {
            score += (div * 2.0).min(10.0);
        }
    }

    FactorResult::valid(kind, pbr, score)
}
