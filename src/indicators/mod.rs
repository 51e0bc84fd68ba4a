//! Indicator calculation over OHLCV bar series.
//!
//! `compute` derives every indicator the available history supports and
//! leaves the rest absent. It never fails: malformed input degrades the
//! affected keys and emits a warning event instead.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod rsi;
pub mod sma;

use tracing::warn;

use crate::types::{keys, Bar, IndicatorSet};

pub const RSI_PERIOD: usize = 14;
pub const EMA_FAST_PERIOD: usize = 12;
pub const EMA_SLOW_PERIOD: usize = 26;
pub const MACD_SIGNAL_PERIOD: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULT: f64 = 2.0;

/// Derive all supported indicators from a time-ordered bar series.
///
/// The latest bar's raw fields are always passed through (when finite).
/// Close-derived indicators are skipped wholesale when the series has
/// non-finite closes or non-monotonic timestamps, since every one of
/// them would be corrupted by the bad data.
pub fn compute(bars: &[Bar]) -> IndicatorSet {
    let mut set = IndicatorSet::new();

    let last = match bars.last() {
        Some(bar) => bar,
        None => return set,
    };

    if !last.is_finite() {
        warn!("non-finite fields on latest bar; affected keys skipped");
    }
    set.insert(keys::PRICE, last.close);
    set.insert(keys::OPEN, last.open);
    set.insert(keys::HIGH, last.high);
    set.insert(keys::LOW, last.low);
    set.insert(keys::VOLUME, last.volume);

    if let Some(i) = (1..bars.len()).find(|&i| bars[i].time <= bars[i - 1].time) {
        warn!(
            "non-monotonic bar timestamp at index {}; close-derived indicators skipped",
            i
        );
        return set;
    }
    if let Some(i) = bars.iter().position(|b| !b.close.is_finite()) {
        warn!(
            "non-finite close at index {}; close-derived indicators skipped",
            i
        );
        return set;
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    if let Some(v) = rsi::rsi(&closes, RSI_PERIOD) {
        set.insert(keys::RSI, v);
    }
    if let Some(v) = ema::ema(&closes, EMA_FAST_PERIOD) {
        set.insert(keys::EMA_FAST, v);
    }
    if let Some(v) = ema::ema(&closes, EMA_SLOW_PERIOD) {
        set.insert(keys::EMA_SLOW, v);
    }
    if let Some(v) = ema::ema(&closes, 50) {
        set.insert(keys::EMA_50, v);
    }
    if let Some(v) = ema::ema(&closes, 200) {
        set.insert(keys::EMA_200, v);
    }
    if let Some(v) = sma::sma(&closes, BOLLINGER_PERIOD) {
        set.insert(keys::SMA_20, v);
    }

    if let Some(out) = macd::macd(
        &closes,
        EMA_FAST_PERIOD,
        EMA_SLOW_PERIOD,
        MACD_SIGNAL_PERIOD,
    ) {
        set.insert(keys::MACD, out.macd);
        set.insert(keys::MACD_SIGNAL, out.signal);
        set.insert(keys::MACD_HISTOGRAM, out.histogram);
    }

    if let Some(out) = bollinger::bands(&closes, BOLLINGER_PERIOD, BOLLINGER_MULT) {
        set.insert(keys::BOLLINGER_UPPER, out.upper);
        set.insert(keys::BOLLINGER_MIDDLE, out.middle);
        set.insert(keys::BOLLINGER_LOWER, out.lower);
        set.insert(
            keys::BB_PERCENT_B,
            bollinger::percent_b(last.close, out.upper, out.lower),
        );
        // Division by a zero middle produces a non-finite width, which
        // insert drops on its own.
        set.insert(keys::BB_WIDTH, (out.upper - out.lower) / out.middle);
    }

    if let Some(v) = momentum::momentum(&closes, 1) {
        set.insert(keys::MOMENTUM_1D, v);
    }
    if let Some(v) = momentum::momentum(&closes, 7) {
        set.insert(keys::MOMENTUM_1W, v);
    }
    if let Some(v) = momentum::momentum(&closes, 30) {
        set.insert(keys::MOMENTUM_1M, v);
    }

    set
}
