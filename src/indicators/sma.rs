//! Simple moving average.

/// Mean of the last `period` values, or `None` when fewer exist.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}
