//! Price level extraction and classification.
//!
//! Two entry points share one normalization routine: levels can be
//! synthesized from computed indicators or parsed out of advisory text.
//! Either way the result carries exactly one `current` entry, collapses
//! duplicate prices, and comes back sorted ascending.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::format::format_price;
use crate::types::{keys, IndicatorSet, LevelKind, PriceLevel};

/// Default percentage offsets for synthesized support/resistance levels.
pub const DEFAULT_LEVEL_OFFSETS_PCT: [f64; 3] = [5.0, 10.0, 15.0];

/// Parsed prices further than this from current become support or
/// resistance; anything nearer is a pivot.
const CLASSIFY_BAND_PCT: f64 = 5.0;

static PRICE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([0-9,.]+)").unwrap()
});

/// Synthesize levels around the current price from indicator data.
///
/// Percentage offsets always contribute; EMA(50), EMA(200), and the
/// Bollinger bands join in when the snapshot carries them.
pub fn from_indicators(
    indicators: &IndicatorSet,
    current_price: f64,
    offsets_pct: &[f64],
) -> Vec<PriceLevel> {
    if !valid_current(current_price) {
        return Vec::new();
    }

    let mut levels = offset_schedule(current_price, offsets_pct);

    for (key, name) in [(keys::EMA_50, "EMA50"), (keys::EMA_200, "EMA200")] {
        if let Some(price) = indicators.get(key) {
            if price > 0.0 {
                let kind = side_kind(price, current_price);
                let major = if key == keys::EMA_200 { " (major)" } else { "" };
                let description = format!("{} {} level{}", name, kind_noun(kind), major);
                levels.push(level(price, kind, current_price, description));
            }
        }
    }

    for (key, name) in [
        (keys::BOLLINGER_LOWER, "Lower Bollinger Band"),
        (keys::BOLLINGER_UPPER, "Upper Bollinger Band"),
    ] {
        if let Some(price) = indicators.get(key) {
            if price > 0.0 {
                let kind = side_kind(price, current_price);
                levels.push(level(price, kind, current_price, name.to_string()));
            }
        }
    }

    normalize(levels, current_price)
}

/// Extract levels from currency tokens in advisory text.
///
/// Tokens that fail to parse as finite positive prices are dropped.
/// Text with no parseable prices falls back to the same offset schedule
/// as the indicator path.
pub fn from_text(text: &str, current_price: f64, offsets_pct: &[f64]) -> Vec<PriceLevel> {
    if !valid_current(current_price) {
        return Vec::new();
    }

    let mut prices: Vec<f64> = Vec::new();
    for cap in PRICE_TOKEN.captures_iter(text) {
        let raw = cap[1].replace(',', "");
        if let Ok(price) = raw.parse::<f64>() {
            if price.is_finite() && price > 0.0 && !prices.contains(&price) {
                prices.push(price);
            }
        }
    }

    let levels = if prices.is_empty() {
        offset_schedule(current_price, offsets_pct)
    } else {
        prices
            .into_iter()
            .map(|price| classify_parsed(price, current_price))
            .collect()
    };

    normalize(levels, current_price)
}

fn offset_schedule(current_price: f64, offsets_pct: &[f64]) -> Vec<PriceLevel> {
    let mut levels = Vec::new();
    for &pct in offsets_pct {
        let horizon = horizon_label(pct);
        levels.push(level(
            current_price * (1.0 - pct / 100.0),
            LevelKind::Support,
            current_price,
            format!("{} support level", horizon),
        ));
        levels.push(level(
            current_price * (1.0 + pct / 100.0),
            LevelKind::Resistance,
            current_price,
            format!("{} resistance level", horizon),
        ));
    }
    levels
}

fn classify_parsed(price: f64, current_price: f64) -> PriceLevel {
    let band = CLASSIFY_BAND_PCT / 100.0;
    let kind = if price < current_price * (1.0 - band) {
        LevelKind::Support
    } else if price > current_price * (1.0 + band) {
        LevelKind::Resistance
    } else {
        LevelKind::Pivot
    };

    let description = match kind {
        LevelKind::Support => format!("Support level at {}", format_price(price)),
        LevelKind::Resistance => format!("Target level at {}", format_price(price)),
        _ => format!("Pivot point at {}", format_price(price)),
    };

    level(price, kind, current_price, description)
}

/// Append the current level, collapse price ties (most specific kind
/// wins), and sort ascending by price.
fn normalize(mut levels: Vec<PriceLevel>, current_price: f64) -> Vec<PriceLevel> {
    levels.retain(|l| l.price.is_finite() && l.price > 0.0);
    levels.push(PriceLevel {
        price: current_price,
        kind: LevelKind::Current,
        confidence: 100.0,
        description: format!("Current price: {}", format_price(current_price)),
        distance_pct: 0.0,
    });

    levels.sort_by(|a, b| {
        a.price
            .total_cmp(&b.price)
            .then_with(|| kind_rank(b.kind).cmp(&kind_rank(a.kind)))
    });
    levels.dedup_by(|a, b| a.price == b.price);

    levels
}

fn level(price: f64, kind: LevelKind, current_price: f64, description: String) -> PriceLevel {
    let distance_pct = (price - current_price) / current_price * 100.0;
    PriceLevel {
        price,
        kind,
        confidence: confidence_for(distance_pct),
        description,
        distance_pct,
    }
}

/// Confidence schedule shared by both entry points: 95 at the current
/// price, falling 4 points per percent of distance, floored at 0.
fn confidence_for(distance_pct: f64) -> f64 {
    (95.0 - 4.0 * distance_pct.abs()).clamp(0.0, 100.0)
}

fn valid_current(current_price: f64) -> bool {
    if current_price.is_finite() && current_price > 0.0 {
        return true;
    }
    warn!("invalid current price {}; no levels produced", current_price);
    false
}

fn side_kind(price: f64, current_price: f64) -> LevelKind {
    if price < current_price {
        LevelKind::Support
    } else if price > current_price {
        LevelKind::Resistance
    } else {
        LevelKind::Pivot
    }
}

fn kind_noun(kind: LevelKind) -> &'static str {
    match kind {
        LevelKind::Support => "support",
        LevelKind::Resistance => "resistance",
        _ => "pivot",
    }
}

fn horizon_label(pct: f64) -> &'static str {
    if pct <= 5.0 {
        "Short-term"
    } else if pct <= 10.0 {
        "Medium-term"
    } else {
        "Longer-term"
    }
}

fn kind_rank(kind: LevelKind) -> u8 {
    match kind {
        LevelKind::Current => 3,
        LevelKind::Support | LevelKind::Resistance => 2,
        LevelKind::Pivot => 1,
    }
}
