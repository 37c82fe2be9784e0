//! Numeric helpers shared by the factor calculators.
//!
//! Everything here is defensive about input length and non-finite values:
//! callers fold a `None` into an invalid factor rather than propagating an
//! error or panicking.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    finite(sum / period as f64)
}

/// Arithmetic mean of a full slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    finite(values.iter().sum::<f64>() / values.len() as f64)
}

/// True range of a bar given the prior close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// RSI over closing prices using Wilder's smoothing.
///
/// Needs `period + 1` closes for the first value; the remaining history is
/// folded in with the standard `(prev * (period - 1) + current) / period`
/// recurrence. Returns 100.0 when there are no losses in the window.
pub fn wilder_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += -change;
        }
    }
    let mut avg_gain = gains / period as f64;
    let mut avg_loss = losses / period as f64;

    for i in (period + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    finite(100.0 - (100.0 / (1.0 + rs)))
}

/// Percent change from `base` to `value`.
pub fn pct_change(value: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    finite((value / base - 1.0) * 100.0)
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Linear interpolation of `value` from `[x0, x1]` onto `[y0, y1]`, clamped
/// to the output range. Used by the piecewise band scorers.
pub fn lerp_band(value: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x1 == x0 {
        return y0;
    }
    let t = ((value - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + t * (y1 - y0)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
