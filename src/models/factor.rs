//! Factor results with explicit validity.
//!
//! A factor that cannot be computed is represented as an invalid result with
//! a NaN raw value, never as a zero score: the composite scorer renormalizes
//! weights over the valid subset instead of silently summing sentinels.

use serde::{Deserialize, Serialize};

/// The six evaluation dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    SupplyDemand,
    Momentum,
    Oscillator,
    Volume,
    Volatility,
    Fundamental,
}

impl FactorKind {
    /// All factors, in the order they are evaluated and reported.
    pub fn all() -> [FactorKind; 6] {
        [
            FactorKind::SupplyDemand,
            FactorKind::Momentum,
            FactorKind::Oscillator,
            FactorKind::Volume,
            FactorKind::Volatility,
            FactorKind::Fundamental,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FactorKind::SupplyDemand => "supply_demand",
            FactorKind::Momentum => "momentum",
            FactorKind::Oscillator => "oscillator",
            FactorKind::Volume => "volume",
            FactorKind::Volatility => "volatility",
            FactorKind::Fundamental => "fundamental",
        }
    }
}

/// One factor's outcome for one ticker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FactorResult {
    pub kind: FactorKind,
    /// Raw metric in the factor's own unit (flow ratio, disparity %, RSI,
    /// volume ratio, ATR %, PBR). NaN when invalid.
    pub raw: f64,
    /// Normalized score in [0, 100]. Meaningless when `valid` is false.
    pub score: f64,
    pub valid: bool,
}

impl FactorResult {
    pub fn valid(kind: FactorKind, raw: f64, score: f64) -> Self {
        Self {
            kind,
            raw,
            score: score.clamp(0.0, 100.0),
            valid: true,
        }
    }

    pub fn invalid(kind: FactorKind) -> Self {
        Self {
            kind,
            raw: f64::NAN,
            score: 0.0,
            valid: false,
        }
    }
}

/// All six factor results for one ticker, evaluation order preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorSet {
    results: Vec<FactorResult>,
}

impl FactorSet {
    pub fn new(results: Vec<FactorResult>) -> Self {
        Self { results }
    }

    pub fn get(&self, kind: FactorKind) -> Option<&FactorResult> {
        self.results.iter().find(|r| r.kind == kind)
    }

    /// Raw value of a factor, `None` when the factor is missing or invalid.
    pub fn raw(&self, kind: FactorKind) -> Option<f64> {
        self.get(kind).filter(|r| r.valid).map(|r| r.raw)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FactorResult> {
        self.results.iter()
    }

    pub fn valid_count(&self) -> usize {
        self.results.iter().filter(|r| r.valid).count()
    }
}
