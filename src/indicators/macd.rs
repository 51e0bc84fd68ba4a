//! MACD (Moving Average Convergence Divergence).

use super::ema::{ema, ema_series};

/// MACD line, signal line, and histogram for the latest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdOutput {
    /// EMA(fast) - EMA(slow).
    pub macd: f64,
    /// EMA(signal_period) of the MACD line.
    pub signal: f64,
    /// MACD - signal.
    pub histogram: f64,
}

/// Compute MACD over a close series.
///
/// Returns `None` until at least `slow` closes exist (the standard
/// 12/26/9 parameterization therefore needs 26 closes).
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> Option<MacdOutput> {
    if closes.len() < slow {
        return None;
    }

    let fast_series = ema_series(closes, fast);
    let slow_series = ema_series(closes, slow);

    let macd_line: Vec<f64> = fast_series
        .iter()
        .zip(slow_series.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal = ema(&macd_line, signal_period)?;
    let macd = *macd_line.last()?;

    Some(MacdOutput {
        macd,
        signal,
        histogram: macd - signal,
    })
}
