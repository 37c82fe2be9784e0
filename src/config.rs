//! Engine configuration: factor weights, thresholds and run limits.
//!
//! Every tuning parameter is a named field with a documented default. The
//! config is an immutable value handed into the engine, so concurrent runs
//! with different presets never interfere.

use std::env;
use std::time::Duration;

/// Get the current environment (development, sandbox, production).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

/// Fixed factor weights. Must sum to 1.0 over the six factors; when a factor
/// is invalid for a stock, the remaining weights are renormalized at scoring
/// time rather than edited here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub supply_demand: f64,
    pub momentum: f64,
    pub oscillator: f64,
    pub volume: f64,
    pub volatility: f64,
    pub fundamental: f64,
}

impl FactorWeights {
    /// Verify weights sum to 1.0
    pub fn verify(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-6
    }

    pub fn sum(&self) -> f64 {
        self.supply_demand
            + self.momentum
            + self.oscillator
            + self.volume
            + self.volatility
            + self.fundamental
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            supply_demand: 0.25,
            momentum: 0.20,
            oscillator: 0.15,
            volume: 0.15,
            volatility: 0.10,
            fundamental: 0.15,
        }
    }
}

/// Full screening configuration.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    pub weights: FactorWeights,

    // Lookback windows (trading sessions)
    pub flow_window: usize,
    pub min_flow_sessions: usize,
    pub ma_short: usize,
    pub ma_mid: usize,
    pub ma_long: usize,
    pub rsi_period: usize,
    pub volume_window: usize,
    pub atr_period: usize,

    // Oscillator constructive band, inclusive on both edges.
    pub rsi_band_low: f64,
    pub rsi_band_high: f64,
    pub rsi_overheat: f64,
    pub rsi_pullback_low: f64,

    // Momentum disparity vs the mid MA, in percent.
    pub disparity_optimal_pct: f64,
    pub disparity_overheat_pct: f64,

    // Volume surge levels (today / 20-session average).
    pub volume_surge_ratio: f64,
    pub volume_spike_ratio: f64,

    // Tag thresholds
    pub double_net_buy_min_value: f64,
    pub supply_surge_ratio: f64,
    pub supply_surge_sessions: usize,
    pub bullish_body_ratio: f64,
    pub bullish_min_return_pct: f64,
    pub undervalued_pbr: f64,
    pub max_tags: usize,

    // Trade parameter derivation
    pub stop_atr_mult: f64,
    pub stop_min_pct: f64,
    pub stop_max_pct: f64,
    pub reward_base: f64,
    pub reward_min: f64,
    pub reward_max: f64,
    pub target_min_pct: f64,
    pub target_max_pct: f64,

    // Run shape
    pub min_valid_factors: usize,
    pub min_composite_score: f64,
    pub top_n: usize,
    pub concurrency: usize,
    pub snapshot_timeout: Duration,
    pub run_budget: Duration,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),

            flow_window: 20,
            min_flow_sessions: 3,
            ma_short: 5,
            ma_mid: 20,
            ma_long: 60,
            rsi_period: 14,
            volume_window: 20,
            atr_period: 14,

            rsi_band_low: 45.0,
            rsi_band_high: 65.0,
            rsi_overheat: 75.0,
            rsi_pullback_low: 30.0,

            disparity_optimal_pct: 5.0,
            disparity_overheat_pct: 10.0,

            volume_surge_ratio: 1.5,
            volume_spike_ratio: 2.0,

            // 1 billion KRW of simultaneous foreign + institution net buying
            double_net_buy_min_value: 1.0e9,
            supply_surge_ratio: 0.02,
            supply_surge_sessions: 3,
            bullish_body_ratio: 0.6,
            bullish_min_return_pct: 2.0,
            undervalued_pbr: 1.0,
            max_tags: 5,

            stop_atr_mult: 2.0,
            stop_min_pct: 2.0,
            stop_max_pct: 8.0,
            reward_base: 0.88,
            reward_min: 1.2,
            reward_max: 2.0,
            target_min_pct: 4.0,
            target_max_pct: 15.0,

            min_valid_factors: 3,
            min_composite_score: 20.0,
            top_n: 3,
            concurrency: 8,
            snapshot_timeout: Duration::from_secs(10),
            run_budget: Duration::from_secs(120),
        }
    }
}

impl ScreeningConfig {
    /// Default configuration with environment overrides applied.
    ///
    /// Only the run-shape knobs are overridable from the environment; the
    /// scoring bands stay in code so results remain reproducible per build.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(top_n) = env_parse::<usize>("TOP_N") {
            config.top_n = top_n.max(1);
        }
        if let Some(concurrency) = env_parse::<usize>("EVAL_CONCURRENCY") {
            config.concurrency = concurrency.max(1);
        }
        if let Some(secs) = env_parse::<u64>("SNAPSHOT_TIMEOUT_SECS") {
            config.snapshot_timeout = Duration::from_secs(secs.max(1));
        }
        if let Some(secs) = env_parse::<u64>("RUN_BUDGET_SECS") {
            config.run_budget = Duration::from_secs(secs.max(1));
        }
        if let Some(min_score) = env_parse::<f64>("MIN_COMPOSITE_SCORE") {
            config.min_composite_score = min_score.clamp(0.0, 100.0);
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
