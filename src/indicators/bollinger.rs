//! Bollinger Bands.

use super::sma::sma;

/// Upper/middle/lower band values for the latest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerOutput {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bands over the trailing `period` closes: SMA(period) plus/minus
/// `mult` sample standard deviations of the same window.
pub fn bands(closes: &[f64], period: usize, mult: f64) -> Option<BollingerOutput> {
    if period < 2 || closes.len() < period {
        return None;
    }

    let middle = sma(closes, period)?;
    let window = &closes[closes.len() - period..];
    let sd = std_dev(window, middle);

    Some(BollingerOutput {
        upper: middle + mult * sd,
        middle,
        lower: middle - mult * sd,
    })
}

/// Position of `price` within the band: 0 at the lower band, 1 at the
/// upper. A zero-width band reads as the midpoint 0.5.
pub fn percent_b(price: f64, upper: f64, lower: f64) -> f64 {
    let width = upper - lower;
    if width == 0.0 {
        return 0.5;
    }
    (price - lower) / width
}

/// Sample standard deviation (n-1 divisor) around a precomputed mean.
fn std_dev(window: &[f64], mean: f64) -> f64 {
    let variance = window
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / (window.len() - 1) as f64;
    variance.sqrt()
}
