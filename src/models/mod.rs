//! Shared data models spanning the engine layers.

pub mod error;
pub mod factor;
pub mod scored;
pub mod snapshot;

pub use error::{ProviderError, SkipReason};
pub use factor::{FactorKind, FactorResult, FactorSet};
pub use scored::{ScoredStock, ScreeningRun, SkippedTicker, TradeParams};
pub use snapshot::{Candle, FlowRecord, Fundamentals, MarketSnapshot};
