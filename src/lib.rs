//! Swingrix: a daily swing-trading screening engine for listed equities.
//!
//! Given a universe of tickers and a per-ticker market snapshot (OHLCV
//! history, investor flows, fundamentals), the engine computes six factor
//! sub-scores, combines them into a weighted composite score, derives a
//! target/stop-loss pair from recent volatility, attaches rule-based tags,
//! and ranks the universe for a single evaluation date.
//!
//! Data retrieval, persistence and the dashboard are external collaborators:
//! snapshots come in through [`services::market_data::SnapshotProvider`] and
//! results leave as a [`report::ScreeningReport`].

pub mod common;
pub mod config;
pub mod engine;
pub mod factors;
pub mod logging;
pub mod models;
pub mod report;
pub mod scoring;
pub mod services;

pub use config::ScreeningConfig;
pub use engine::ScreeningEngine;
pub use models::{FactorKind, FactorResult, MarketSnapshot, ScoredStock, ScreeningRun};
pub use report::ScreeningReport;
