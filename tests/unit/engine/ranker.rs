//! Unit tests for deterministic ranking and top-N selection

use std::cmp::Ordering;

use swingrix::engine::ranker::{compare, rank_and_select};
use swingrix::models::ScoredStock;

fn stock(ticker: &str, score: f64, daily_return_pct: f64) -> ScoredStock {
    ScoredStock {
        ticker: ticker.to_string(),
        name: format!("{ticker} Corp"),
        sector: None,
        price: 10_000.0,
        daily_return_pct,
        composite_score: score,
        trade_params: None,
        rsi: None,
        tags: Vec::new(),
        commentary: String::new(),
    }
}

fn tickers(stocks: &[ScoredStock]) -> Vec<&str> {
    stocks.iter().map(|s| s.ticker.as_str()).collect()
}

#[test]
fn test_orders_by_score_descending() {
    let (ranked, _) = rank_and_select(
        vec![stock("A", 55.0, 1.0), stock("B", 82.5, 1.0), stock("C", 70.0, 1.0)],
        3,
    );
    assert_eq!(tickers(&ranked), vec!["B", "C", "A"]);
}

#[test]
fn test_score_tie_breaks_on_daily_return() {
    let (ranked, _) = rank_and_select(
        vec![stock("A", 70.0, 0.5), stock("B", 70.0, 3.2), stock("C", 70.0, -1.0)],
        3,
    );
    assert_eq!(tickers(&ranked), vec!["B", "A", "C"]);
}

#[test]
fn test_full_tie_breaks_on_ticker() {
    let (ranked, _) = rank_and_select(
        vec![stock("900300", 70.0, 1.0), stock("000660", 70.0, 1.0)],
        2,
    );
    assert_eq!(tickers(&ranked), vec!["000660", "900300"]);
    assert_eq!(
        compare(&stock("000660", 70.0, 1.0), &stock("900300", 70.0, 1.0)),
        Ordering::Less
    );
}

#[test]
fn test_top_picks_are_the_leading_subsequence() {
    let stocks = vec![
        stock("A", 40.0, 0.0),
        stock("B", 90.0, 0.0),
        stock("C", 75.0, 0.0),
        stock("D", 60.0, 0.0),
        stock("E", 85.0, 0.0),
    ];
    let (ranked, top) = rank_and_select(stocks, 3);
    assert_eq!(tickers(&ranked), vec!["B", "E", "C", "D", "A"]);
    assert_eq!(tickers(&top), vec!["B", "E", "C"]);
}

#[test]
fn test_top_n_larger_than_universe() {
    let (ranked, top) = rank_and_select(vec![stock("A", 40.0, 0.0), stock("B", 90.0, 0.0)], 10);
    assert_eq!(top.len(), ranked.len());
}

#[test]
fn test_ranking_is_idempotent() {
    let stocks = vec![stock("A", 40.0, 0.0), stock("B", 90.0, 0.0), stock("C", 62.1, 0.4)];
    let (once, _) = rank_and_select(stocks, 3);
    let (twice, _) = rank_and_select(once.clone(), 3);
    assert_eq!(tickers(&once), tickers(&twice));
}
