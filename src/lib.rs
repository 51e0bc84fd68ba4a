//! Augur - Technical-analysis engine for OHLCV market data
//!
//! Feed it a series of [`Bar`]s and it computes standard indicators
//! (RSI, EMA, MACD, Bollinger bands, momentum), folds them into a
//! weighted buy/sell signal, and derives support/resistance price
//! levels. Results are cached per symbol with a TTL; see
//! [`AnalysisEngine`] for the main entry point.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod indicators;
pub mod levels;
pub mod score;
pub mod types;

// Re-export commonly used types
pub use cache::{KeyedCache, NoopCache, TtlCache};
pub use config::EngineConfig;
pub use engine::AnalysisEngine;
pub use error::{EngineError, Result};
pub use format::format_price;
pub use types::*;
