//! Analysis engine tying indicators, scoring, and levels together.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{KeyedCache, TtlCache};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::types::{keys, Bar, PriceLevel, SymbolAnalysis};
use crate::{indicators, levels, score};

/// Computes and caches per-symbol market analysis.
///
/// Results are cached under the lowercased symbol, so `"BTC"` and
/// `"btc"` share an entry. The cache itself is pluggable; see
/// [`crate::cache::NoopCache`] to disable caching entirely.
pub struct AnalysisEngine {
    cache: Arc<dyn KeyedCache<SymbolAnalysis>>,
    config: EngineConfig,
}

impl AnalysisEngine {
    /// Create an engine with the default in-memory TTL cache.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            cache: Arc::new(TtlCache::new()),
            config,
        }
    }

    /// Create an engine backed by a caller-supplied cache.
    pub fn with_cache(config: EngineConfig, cache: Arc<dyn KeyedCache<SymbolAnalysis>>) -> Self {
        Self { cache, config }
    }

    /// Full analysis for a symbol: indicators, composite signal, mood,
    /// and price levels. Served from cache while fresh; recomputed
    /// otherwise. Failures are returned to the caller and never cached,
    /// leaving any stale entry available via [`peek`](Self::peek).
    pub fn analyze(&self, symbol: &str, bars: &[Bar]) -> Result<SymbolAnalysis> {
        let key = symbol.to_lowercase();
        self.cache
            .get_or_compute(&key, self.config.cache_ttl, &mut || {
                self.compute(symbol, bars)
            })
    }

    /// Last cached analysis for a symbol, even when expired.
    pub fn peek(&self, symbol: &str) -> Option<SymbolAnalysis> {
        self.cache.peek(&symbol.to_lowercase())
    }

    /// Drop the cached analysis for one symbol.
    pub fn invalidate(&self, symbol: &str) {
        self.cache.invalidate(&symbol.to_lowercase());
    }

    /// Drop all cached analyses.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Price levels parsed out of free-form commentary, classified
    /// against `current_price` using the configured offset schedule.
    pub fn extract_text_levels(&self, text: &str, current_price: f64) -> Vec<PriceLevel> {
        levels::from_text(text, current_price, &self.config.level_offsets_pct)
    }

    fn compute(&self, symbol: &str, bars: &[Bar]) -> Result<SymbolAnalysis> {
        if bars.is_empty() {
            warn!("No bars for symbol {}; cannot compute analysis", symbol);
            return Err(EngineError::EmptySeries(symbol.to_string()));
        }

        debug!("Computing analysis for {} with {} bars", symbol, bars.len());

        let indicators = indicators::compute(bars);
        let signal = score::aggregate(&indicators);
        let mood = score::market_mood(&indicators);

        let current_price = indicators.get(keys::PRICE).unwrap_or(0.0);
        let levels =
            levels::from_indicators(&indicators, current_price, &self.config.level_offsets_pct);

        Ok(SymbolAnalysis {
            symbol: symbol.to_uppercase(),
            indicators,
            signal,
            mood,
            levels,
            timestamp: chrono::Utc::now().timestamp_millis(),
        })
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
