use serde::{Deserialize, Serialize};

/// One OHLCV (open/high/low/close/volume) observation for a fixed interval.
///
/// Sequences are expected to be time-ordered with strictly increasing
/// timestamps and no duplicates; the engine validates this and degrades
/// affected indicators instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    /// Unix timestamp (milliseconds) of the interval open.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// True when every price field and the volume are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}
