use serde::{Deserialize, Serialize};

use crate::types::{IndicatorSet, PriceLevel};

/// Direction of a composite trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalDirection {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl SignalDirection {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strong-buy" | "strong_buy" => Some(Self::StrongBuy),
            "buy" => Some(Self::Buy),
            "hold" | "neutral" => Some(Self::Hold),
            "sell" => Some(Self::Sell),
            "strong-sell" | "strong_sell" => Some(Self::StrongSell),
            _ => None,
        }
    }

    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::StrongBuy => "Strong Buy",
            SignalDirection::Buy => "Buy",
            SignalDirection::Hold => "Hold",
            SignalDirection::Sell => "Sell",
            SignalDirection::StrongSell => "Strong Sell",
        }
    }
}

/// One vote cast by an indicator during aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalFactor {
    /// Factor name (e.g., "rsi", "macd").
    pub name: String,
    /// Direction the factor voted for (always buy or sell).
    pub direction: SignalDirection,
    /// Vote weight contributed to that side.
    pub weight: u32,
}

/// Composite directional signal with confidence and factor breakdown.
///
/// Pure function of an indicator snapshot: identical inputs always
/// produce an identical signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Overall direction.
    pub direction: SignalDirection,
    /// Confidence level (0-100). Higher = more one-sided votes.
    pub confidence: f64,
    /// Total buy-side vote weight.
    pub buy_score: u32,
    /// Total sell-side vote weight.
    pub sell_score: u32,
    /// Every vote that was cast, in rule order.
    pub factors: Vec<SignalFactor>,
}

/// Broad market mood derived from momentum and RSI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketMood {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl MarketMood {
    /// Get display label for this mood.
    pub fn label(&self) -> &'static str {
        match self {
            MarketMood::Bullish => "Bullish",
            MarketMood::Bearish => "Bearish",
            MarketMood::Neutral => "Neutral",
        }
    }
}

/// Full analysis product for one symbol: indicators, composite signal,
/// mood, and price levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolAnalysis {
    /// Symbol this analysis is for.
    pub symbol: String,
    /// Computed indicator values.
    pub indicators: IndicatorSet,
    /// Composite directional signal.
    pub signal: Signal,
    /// Broad market mood.
    pub mood: MarketMood,
    /// Support/resistance levels around the current price.
    pub levels: Vec<PriceLevel>,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}
