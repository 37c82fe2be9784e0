//! Screening run orchestration.
//!
//! Each ticker is an independent unit of work: snapshot fetch (bounded by a
//! per-ticker timeout), factor calculation, composite scoring, parameter
//! derivation and tag classification never share state across tickers. The
//! universe is evaluated through a bounded parallel stream; ranking is the
//! single synchronization point once all evaluations complete or the soft
//! run budget expires, in which case whatever finished is returned and the
//! remainder is recorded as skipped.

pub mod ranker;

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use futures_util::StreamExt;
use tracing::{debug, info, warn};

use crate::config::ScreeningConfig;
use crate::factors;
use crate::models::{
    FactorKind, MarketSnapshot, ScoredStock, ScreeningRun, SkipReason, SkippedTicker,
};
use crate::scoring::{self, TagRule};
use crate::services::market_data::SnapshotProvider;

/// The screening engine. Holds an immutable config so concurrent runs with
/// different presets never interfere.
pub struct ScreeningEngine<P> {
    provider: Arc<P>,
    config: ScreeningConfig,
}

impl<P: SnapshotProvider> ScreeningEngine<P> {
    pub fn new(provider: Arc<P>, config: ScreeningConfig) -> Self {
        debug_assert!(
            config.weights.verify(),
            "factor weights must sum to 1.0, got {}",
            config.weights.sum()
        );
        Self { provider, config }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Run a full screening for one evaluation date.
    ///
    /// Always returns a well-formed run: universe-level failures surface in
    /// the `error` field, per-ticker failures in `skipped`.
    pub async fn run(&self, as_of: NaiveDate) -> ScreeningRun {
        let started = Instant::now();
        let deadline = tokio::time::Instant::now() + self.config.run_budget;

        let universe = match self.provider.list_universe(as_of).await {
            Ok(universe) => universe,
            Err(err) => {
                warn!(%as_of, error = %err, "universe listing failed");
                return ScreeningRun::failed(as_of, format!("universe listing failed: {err}"));
            }
        };
        if universe.is_empty() {
            return ScreeningRun::failed(as_of, "universe is empty");
        }

        info!(%as_of, tickers = universe.len(), "screening run started");

        let rules = scoring::default_rules();
        let config = &self.config;
        let provider = &self.provider;

        let mut pending: BTreeSet<String> = universe.iter().cloned().collect();
        let mut stream = futures_util::stream::iter(universe.iter().cloned())
            .map(|ticker| {
                let rules = &rules;
                async move {
                    let fetched = tokio::time::timeout(
                        config.snapshot_timeout,
                        provider.get_snapshot(&ticker, as_of),
                    )
                    .await;
                    let outcome = match fetched {
                        Err(_) => Err(SkipReason::Timeout),
                        Ok(Err(err)) => {
                            debug!(%ticker, error = %err, "snapshot unavailable");
                            Err(SkipReason::DataUnavailable)
                        }
                        Ok(Ok(snapshot)) => evaluate_ticker(&snapshot, rules, config),
                    };
                    (ticker, outcome)
                }
            })
            .buffer_unordered(config.concurrency);

        let mut scored = Vec::new();
        let mut skipped = Vec::new();
        loop {
            match tokio::time::timeout_at(deadline, stream.next()).await {
                Ok(Some((ticker, outcome))) => {
                    pending.remove(&ticker);
                    match outcome {
                        Ok(stock) => scored.push(stock),
                        Err(reason) => skipped.push(SkippedTicker { ticker, reason }),
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    warn!(
                        %as_of,
                        unfinished = pending.len(),
                        "run budget exhausted; returning partial results"
                    );
                    break;
                }
            }
        }
        drop(stream);
        for ticker in pending {
            skipped.push(SkippedTicker {
                ticker,
                reason: SkipReason::RunBudgetExhausted,
            });
        }

        let (stocks, top_picks) = ranker::rank_and_select(scored, config.top_n);
        let error = stocks
            .is_empty()
            .then(|| "no tickers could be evaluated".to_string());

        info!(
            %as_of,
            scored = stocks.len(),
            skipped = skipped.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "screening run finished"
        );

        ScreeningRun {
            as_of_date: as_of,
            stocks,
            top_picks,
            skipped,
            error,
        }
    }
}

/// Evaluate one ticker: factors, composite, trade parameters, tags.
///
/// Pure and synchronous; the only inputs are the snapshot, the rule list and
/// the config, so identical inputs always produce identical records.
pub fn evaluate_ticker(
    snapshot: &MarketSnapshot,
    rules: &[Box<dyn TagRule>],
    config: &ScreeningConfig,
) -> Result<ScoredStock, SkipReason> {
    if !snapshot.is_usable() {
        return Err(SkipReason::DataUnavailable);
    }
    let daily_return_pct = snapshot
        .daily_return_pct()
        .ok_or(SkipReason::DataUnavailable)?;

    let factor_set = factors::evaluate_all(snapshot, config);
    let composite_score = scoring::composite_score(&factor_set, config)?;
    if composite_score < config.min_composite_score {
        return Err(SkipReason::BelowMinScore);
    }

    let trade_params = scoring::derive_trade_params(
        snapshot.price,
        composite_score,
        factor_set.raw(FactorKind::Volatility),
        config,
    );
    let tags = scoring::classify(snapshot, &factor_set, rules, config);

    Ok(ScoredStock {
        ticker: snapshot.ticker.clone(),
        name: snapshot.name.clone(),
        sector: snapshot.sector.clone(),
        price: snapshot.price,
        daily_return_pct: crate::common::math::round1(daily_return_pct),
        composite_score,
        trade_params,
        rsi: factor_set
            .raw(FactorKind::Oscillator)
            .map(crate::common::math::round1),
        tags,
        commentary: String::new(),
    })
}
