//! Unit tests for target/stop derivation

use approx::assert_relative_eq;
use swingrix::config::ScreeningConfig;
use swingrix::scoring::derive_trade_params;

#[test]
fn test_reference_case() {
    // 50_000 quote, composite 72, ATR 2.5%: stop 5% (47_500), reward 1.6,
    // target 8% (54_000).
    let config = ScreeningConfig::default();
    let params = derive_trade_params(50_000.0, 72.0, Some(2.5), &config).unwrap();
    assert_relative_eq!(params.stop_loss_price, 47_500.0);
    assert_relative_eq!(params.target_price, 54_000.0);
    assert_relative_eq!(params.target_return_pct, 8.0);
    assert_relative_eq!(params.stop_return_pct, -5.0);
}

#[test]
fn test_no_volatility_estimate_no_params() {
    let config = ScreeningConfig::default();
    assert!(derive_trade_params(50_000.0, 72.0, None, &config).is_none());
    assert!(derive_trade_params(50_000.0, 72.0, Some(0.0), &config).is_none());
    assert!(derive_trade_params(50_000.0, 72.0, Some(-1.0), &config).is_none());
    assert!(derive_trade_params(50_000.0, 72.0, Some(f64::NAN), &config).is_none());
    assert!(derive_trade_params(0.0, 72.0, Some(2.5), &config).is_none());
}

#[test]
fn test_quiet_name_hits_both_floors() {
    // ATR 0.5% doubles to 1%, floored at the 2% minimum stop. A perfect
    // score gives reward 1.88, so the raw target of 3.76% floors at 4%.
    let config = ScreeningConfig::default();
    let params = derive_trade_params(50_000.0, 100.0, Some(0.5), &config).unwrap();
    assert_relative_eq!(params.stop_loss_price, 49_000.0);
    assert_relative_eq!(params.target_price, 52_000.0);
}

#[test]
fn test_turbulent_name_hits_stop_ceiling() {
    // ATR 10% doubles to 20%, capped at the 8% maximum stop; a zero score
    // floors the reward multiple at 1.2 for a 9.6% target.
    let config = ScreeningConfig::default();
    let params = derive_trade_params(50_000.0, 0.0, Some(10.0), &config).unwrap();
    assert_relative_eq!(params.stop_loss_price, 46_000.0);
    assert_relative_eq!(params.target_price, 54_800.0);
}

#[test]
fn test_bracket_always_straddles_the_entry() {
    let config = ScreeningConfig::default();
    for price in [700.0, 5_000.0, 50_000.0, 1_200_000.0] {
        for score in [0.0, 35.0, 72.0, 100.0] {
            for atr_pct in [0.3, 1.2, 2.5, 6.0, 12.0] {
                let params = derive_trade_params(price, score, Some(atr_pct), &config)
                    .expect("bracket should derive for plausible inputs");
                assert!(params.stop_loss_price < price);
                assert!(params.target_price > price);
                assert!(params.target_return_pct > 0.0);
                assert!(params.stop_return_pct < 0.0);
            }
        }
    }
}

#[test]
fn test_rounding_collapse_yields_none() {
    // A 10-unit quote with the minimum 2% stop rounds back onto the entry.
    let config = ScreeningConfig::default();
    assert!(derive_trade_params(10.0, 50.0, Some(0.2), &config).is_none());
}
