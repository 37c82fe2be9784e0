//! Boundary serializer toward the external persistence/UI layers.
//!
//! The report carries `kind` and `as_of_date` so the external store can
//! upsert idempotently per (date, kind) pair: re-running the engine for the
//! same date overwrites rather than duplicates. `error` is present only when
//! the run produced zero usable results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ScoredStock, ScreeningRun};

pub const REPORT_KIND: &str = "swing_screening";

/// One per-stock record in the serialized output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub ticker: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub current_price: f64,
    pub daily_return_pct: f64,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_return_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_return_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    pub tags: Vec<String>,
    pub commentary: String,
}

impl From<&ScoredStock> for StockRecord {
    fn from(stock: &ScoredStock) -> Self {
        Self {
            ticker: stock.ticker.clone(),
            name: stock.name.clone(),
            sector: stock.sector.clone(),
            current_price: stock.price,
            daily_return_pct: stock.daily_return_pct,
            score: stock.composite_score,
            target_price: stock.trade_params.map(|p| p.target_price),
            stop_loss_price: stock.trade_params.map(|p| p.stop_loss_price),
            target_return_pct: stock.trade_params.map(|p| p.target_return_pct),
            stop_return_pct: stock.trade_params.map(|p| p.stop_return_pct),
            rsi: stock.rsi,
            tags: stock.tags.clone(),
            commentary: stock.commentary.clone(),
        }
    }
}

/// The full serialized run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub kind: String,
    pub as_of_date: NaiveDate,
    pub data: Vec<StockRecord>,
    pub top_picks: Vec<StockRecord>,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ScreeningRun> for ScreeningReport {
    fn from(run: &ScreeningRun) -> Self {
        Self {
            kind: REPORT_KIND.to_string(),
            as_of_date: run.as_of_date,
            data: run.stocks.iter().map(StockRecord::from).collect(),
            top_picks: run.top_picks.iter().map(StockRecord::from).collect(),
            skipped: run.skipped_count(),
            error: run.error.clone(),
        }
    }
}
