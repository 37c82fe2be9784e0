//! Error taxonomy for the screening run.
//!
//! Per-ticker failures are recovered locally: the ticker is skipped with a
//! reason code and the run continues. Only a failed universe listing (or an
//! entirely empty result) surfaces as a run-level error, and even then the
//! run returns a well-formed empty result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures crossing the snapshot-provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("data unavailable: {0}")]
    Unavailable(String),
    #[error("unknown ticker: {0}")]
    UnknownTicker(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed snapshot data: {0}")]
    Malformed(String),
}

/// Why a ticker was excluded from the ranked results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Snapshot fetch failed or the quote itself was unusable.
    DataUnavailable,
    /// The provider did not answer within the per-ticker timeout.
    Timeout,
    /// Fewer than the minimum number of factors could be computed.
    TooFewValidFactors,
    /// Scored below the configured composite floor.
    BelowMinScore,
    /// The soft run budget expired before this ticker completed.
    RunBudgetExhausted,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::DataUnavailable => "data_unavailable",
            SkipReason::Timeout => "timeout",
            SkipReason::TooFewValidFactors => "too_few_valid_factors",
            SkipReason::BelowMinScore => "below_min_score",
            SkipReason::RunBudgetExhausted => "run_budget_exhausted",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
