//! Exponential moving average.

/// Compute the full EMA series for `values`.
///
/// Smoothing factor is 2/(period + 1), seeded by the first value, so the
/// series has the same length as the input and uses no look-ahead.
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    if values.is_empty() || period == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let mut series = Vec::with_capacity(values.len());
    series.push(values[0]);

    for &value in &values[1..] {
        let prev = series[series.len() - 1];
        series.push(prev + alpha * (value - prev));
    }

    series
}

/// Latest EMA value, or `None` when fewer than `period` values exist.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    ema_series(values, period).last().copied()
}
