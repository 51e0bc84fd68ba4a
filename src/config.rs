use std::env;
use std::time::Duration;

use crate::levels::DEFAULT_LEVEL_OFFSETS_PCT;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Freshness window for cached per-symbol analysis.
    pub cache_ttl: Duration,
    /// Percentage offsets used when synthesizing default price levels.
    pub level_offsets_pct: Vec<f64>,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        // Format: "5,10,15" (percent distances from the current price)
        let level_offsets_pct = env::var("LEVEL_OFFSETS_PCT")
            .ok()
            .and_then(|s| parse_offsets(&s))
            .unwrap_or_else(|| DEFAULT_LEVEL_OFFSETS_PCT.to_vec());

        Self {
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(300),
            ),
            level_offsets_pct,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            level_offsets_pct: DEFAULT_LEVEL_OFFSETS_PCT.to_vec(),
        }
    }
}

fn parse_offsets(raw: &str) -> Option<Vec<f64>> {
    let offsets: Vec<f64> = raw
        .split(',')
        .filter_map(|part| part.trim().parse::<f64>().ok())
        .filter(|pct| pct.is_finite() && *pct > 0.0)
        .collect();

    if offsets.is_empty() {
        None
    } else {
        Some(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // EngineConfig Tests
    // =========================================================================

    #[test]
    fn test_config_default_values() {
        let config = EngineConfig::default();

        assert_eq!(config.cache_ttl, Duration::from_secs(300));
        assert_eq!(config.level_offsets_pct, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_config_custom_values() {
        let config = EngineConfig {
            cache_ttl: Duration::from_secs(30),
            level_offsets_pct: vec![2.5, 5.0],
        };

        assert_eq!(config.cache_ttl.as_secs(), 30);
        assert_eq!(config.level_offsets_pct.len(), 2);
    }

    #[test]
    fn test_config_clone() {
        let config = EngineConfig::default();
        let cloned = config.clone();

        assert_eq!(cloned.cache_ttl, config.cache_ttl);
        assert_eq!(cloned.level_offsets_pct, config.level_offsets_pct);
    }

    // =========================================================================
    // Offset Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_offsets_valid() {
        let offsets = parse_offsets("5,10,15").unwrap();
        assert_eq!(offsets, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_parse_offsets_with_whitespace() {
        let offsets = parse_offsets(" 2.5, 7.5 ").unwrap();
        assert_eq!(offsets, vec![2.5, 7.5]);
    }

    #[test]
    fn test_parse_offsets_skips_invalid_entries() {
        let offsets = parse_offsets("5,abc,-3,10").unwrap();
        assert_eq!(offsets, vec![5.0, 10.0]);
    }

    #[test]
    fn test_parse_offsets_empty_is_none() {
        assert!(parse_offsets("").is_none());
        assert!(parse_offsets("abc,def").is_none());
    }
}
