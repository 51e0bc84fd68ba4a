use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known indicator key names.
pub mod keys {
    pub const PRICE: &str = "price";
    pub const OPEN: &str = "open";
    pub const HIGH: &str = "high";
    pub const LOW: &str = "low";
    pub const VOLUME: &str = "volume";
    pub const RSI: &str = "rsi";
    pub const EMA_FAST: &str = "ema_fast";
    pub const EMA_SLOW: &str = "ema_slow";
    pub const EMA_50: &str = "ema_50";
    pub const EMA_200: &str = "ema_200";
    pub const SMA_20: &str = "sma_20";
    pub const MACD: &str = "macd";
    pub const MACD_SIGNAL: &str = "macd_signal";
    pub const MACD_HISTOGRAM: &str = "macd_histogram";
    pub const BOLLINGER_UPPER: &str = "bollinger_upper";
    pub const BOLLINGER_MIDDLE: &str = "bollinger_middle";
    pub const BOLLINGER_LOWER: &str = "bollinger_lower";
    pub const BB_PERCENT_B: &str = "bb_percent_b";
    pub const BB_WIDTH: &str = "bb_width";
    pub const MOMENTUM_1D: &str = "momentum_1d";
    pub const MOMENTUM_1W: &str = "momentum_1w";
    pub const MOMENTUM_1M: &str = "momentum_1m";
}

/// Computed indicator values for one symbol, keyed by name.
///
/// A missing key means the indicator could not be computed from the
/// available history. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSet {
    values: BTreeMap<String, f64>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. Non-finite values are dropped so that consumers
    /// never observe NaN or infinities.
    pub fn insert(&mut self, key: &str, value: f64) {
        if value.is_finite() {
            self.values.insert(key.to_string(), value);
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
