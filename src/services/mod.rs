//! External service boundaries.

pub mod market_data;

pub use market_data::{SnapshotProvider, StaticSnapshotProvider};
