//! Composite scoring, trade-parameter derivation and tag classification.

pub mod composite;
pub mod tags;
pub mod trade_params;

pub use composite::composite_score;
pub use tags::{classify, default_rules, TagRule};
pub use trade_params::derive_trade_params;
