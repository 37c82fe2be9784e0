//! Terminal per-stock record and the per-date run container.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::SkipReason;

/// Target / stop-loss pair derived from composite score and volatility.
/// Absent entirely when volatility could not be estimated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeParams {
    pub target_price: f64,
    pub stop_loss_price: f64,
    /// Expected gain to target, percent, positive.
    pub target_return_pct: f64,
    /// Loss at the stop, percent, negative.
    pub stop_return_pct: f64,
}

/// One ranked stock in a screening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredStock {
    pub ticker: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub price: f64,
    pub daily_return_pct: f64,
    /// Composite score in [0, 100], one decimal place.
    pub composite_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_params: Option<TradeParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    /// Tags in classification-rule order, capped.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Filled by an external commentary generator; empty by default.
    #[serde(default)]
    pub commentary: String,
}

/// A ticker excluded from the run, with its reason code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedTicker {
    pub ticker: String,
    pub reason: SkipReason,
}

/// The fully materialized result of one evaluation date. Never mutated after
/// the engine hands it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRun {
    pub as_of_date: NaiveDate,
    /// All scored stocks, descending by composite score; ties broken by
    /// daily return (descending) then ticker (ascending).
    pub stocks: Vec<ScoredStock>,
    /// Leading sub-sequence of `stocks`.
    pub top_picks: Vec<ScoredStock>,
    pub skipped: Vec<SkippedTicker>,
    /// Set only when the run produced zero usable results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScreeningRun {
    /// An empty run carrying a run-level error message.
    pub fn failed(as_of_date: NaiveDate, message: impl Into<String>) -> Self {
        Self {
            as_of_date,
            stocks: Vec::new(),
            top_picks: Vec::new(),
            skipped: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
