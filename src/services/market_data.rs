//! Market snapshot provider interface.
//!
//! The engine never fetches market data itself; an adapter implementing
//! [`SnapshotProvider`] hands it snapshots. Each call is independent per
//! ticker and may fail per ticker without affecting the rest of the run.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{MarketSnapshot, ProviderError};

#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Ordered ticker universe for the evaluation date.
    async fn list_universe(&self, as_of: NaiveDate) -> Result<Vec<String>, ProviderError>;

    /// One ticker's snapshot as of the evaluation date.
    async fn get_snapshot(
        &self,
        ticker: &str,
        as_of: NaiveDate,
    ) -> Result<MarketSnapshot, ProviderError>;
}

/// Serialized form consumed by [`StaticSnapshotProvider::from_json_file`]:
/// the full universe for one date, snapshots in universe order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub as_of_date: NaiveDate,
    pub snapshots: Vec<MarketSnapshot>,
}

/// In-memory provider over a fixed snapshot set. Used by the worker binary
/// (snapshots prepared by an upstream collector) and by tests.
///
/// A provider loaded from a snapshot file is pinned to that file's
/// `as_of_date`: listing the universe for any other date fails rather than
/// silently serving stale data.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotProvider {
    universe: Vec<String>,
    snapshots: HashMap<String, MarketSnapshot>,
    as_of_date: Option<NaiveDate>,
}

impl StaticSnapshotProvider {
    /// Build from snapshots; universe order follows the input order.
    pub fn new(snapshots: Vec<MarketSnapshot>) -> Self {
        let universe = snapshots.iter().map(|s| s.ticker.clone()).collect();
        let snapshots = snapshots
            .into_iter()
            .map(|s| (s.ticker.clone(), s))
            .collect();
        Self {
            universe,
            snapshots,
            as_of_date: None,
        }
    }

    /// Restrict the provider to one evaluation date.
    pub fn pinned_to(mut self, as_of: NaiveDate) -> Self {
        self.as_of_date = Some(as_of);
        self
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let contents = std::fs::read_to_string(path)?;
        let file: SnapshotFile = serde_json::from_str(&contents)
            .map_err(|err| ProviderError::Malformed(err.to_string()))?;
        Ok(Self::new(file.snapshots).pinned_to(file.as_of_date))
    }

    pub fn len(&self) -> usize {
        self.universe.len()
    }

    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }
}

#[async_trait]
impl SnapshotProvider for StaticSnapshotProvider {
    async fn list_universe(&self, as_of: NaiveDate) -> Result<Vec<String>, ProviderError> {
        if let Some(pinned) = self.as_of_date {
            if pinned != as_of {
                return Err(ProviderError::Unavailable(format!(
                    "snapshots are for {pinned}, requested {as_of}"
                )));
            }
        }
        Ok(self.universe.clone())
    }

    async fn get_snapshot(
        &self,
        ticker: &str,
        _as_of: NaiveDate,
    ) -> Result<MarketSnapshot, ProviderError> {
        self.snapshots
            .get(ticker)
            .cloned()
            .ok_or_else(|| ProviderError::UnknownTicker(ticker.to_string()))
    }
}
