//! Deterministic ranking and top-N selection.

use std::cmp::Ordering;

use crate::models::ScoredStock;

/// Total order over scored stocks: composite score descending, then daily
/// return descending, then ticker ascending. `total_cmp` keeps the order
/// total even for pathological float inputs.
pub fn compare(a: &ScoredStock, b: &ScoredStock) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then(b.daily_return_pct.total_cmp(&a.daily_return_pct))
        .then_with(|| a.ticker.cmp(&b.ticker))
}

/// Sort the universe and split off the leading `top_n` picks.
///
/// Pure sort/partition: no recomputation, idempotent on identical input.
pub fn rank_and_select(mut stocks: Vec<ScoredStock>, top_n: usize) -> (Vec<ScoredStock>, Vec<ScoredStock>) {
    stocks.sort_by(compare);
    let top_picks = stocks.iter().take(top_n).cloned().collect();
    (stocks, top_picks)
}
