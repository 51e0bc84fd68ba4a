//! Relative Strength Index (RSI).

/// RSI over the last `period` close-to-close deltas.
///
/// Average gain over average loss across a simple rolling window, mapped
/// to 0-100. When the window shows no losses the relative strength is
/// treated as maximal (RSI 100) rather than dividing by zero. Requires
/// `period + 1` closes; consumers treat a missing value as neutral 50.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let start = closes.len() - period - 1;
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;

    for i in (start + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += -change;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
