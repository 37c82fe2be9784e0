//! Per-ticker market snapshot consumed by the scoring pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Traded value approximated as close * volume.
    pub fn traded_value(&self) -> f64 {
        self.close * self.volume
    }
}

/// Net foreign / institutional buying for one session, in currency units.
/// Positive values are net buys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlowRecord {
    pub date: NaiveDate,
    pub foreign_value: f64,
    pub institution_value: f64,
}

impl FlowRecord {
    pub fn combined(&self) -> f64 {
        self.foreign_value + self.institution_value
    }
}

/// Fundamental ratios as of the evaluation date. All optional: absent
/// fundamentals make the fundamental factor invalid, never zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<f64>,
}

/// Immutable per-ticker input bundle for one evaluation date.
///
/// `candles` and `flows` are ordered oldest first, most recent session last.
/// The snapshot is owned exclusively by the scoring pass that consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub ticker: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    pub price: f64,
    pub prev_close: f64,
    #[serde(default)]
    pub candles: Vec<Candle>,
    #[serde(default)]
    pub flows: Vec<FlowRecord>,
    #[serde(default)]
    pub fundamentals: Fundamentals,
}

impl MarketSnapshot {
    pub fn new(ticker: impl Into<String>, name: impl Into<String>, price: f64, prev_close: f64) -> Self {
        Self {
            ticker: ticker.into(),
            name: name.into(),
            sector: None,
            price,
            prev_close,
            candles: Vec::new(),
            flows: Vec::new(),
            fundamentals: Fundamentals::default(),
        }
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_candles(mut self, candles: Vec<Candle>) -> Self {
        self.candles = candles;
        self
    }

    pub fn with_flows(mut self, flows: Vec<FlowRecord>) -> Self {
        self.flows = flows;
        self
    }

    pub fn with_fundamentals(mut self, fundamentals: Fundamentals) -> Self {
        self.fundamentals = fundamentals;
        self
    }

    /// Daily return vs the prior close, in percent. `None` when the prior
    /// close is unusable.
    pub fn daily_return_pct(&self) -> Option<f64> {
        if self.prev_close <= 0.0 {
            return None;
        }
        let ret = (self.price / self.prev_close - 1.0) * 100.0;
        ret.is_finite().then_some(ret)
    }

    /// Closing prices, oldest first.
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }

    /// Volumes, oldest first.
    pub fn volumes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.volume).collect()
    }

    /// The most recent bar, if any history is present.
    pub fn last_candle(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Minimal sanity check used before scoring: a positive quote and a
    /// usable prior close.
    pub fn is_usable(&self) -> bool {
        self.price > 0.0 && self.prev_close > 0.0 && self.price.is_finite()
    }
}
