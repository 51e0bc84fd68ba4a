use serde::{Deserialize, Serialize};

/// Classification of a price level relative to the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelKind {
    Support,
    Resistance,
    Pivot,
    Current,
}

impl LevelKind {
    /// Get display label for this kind.
    pub fn label(&self) -> &'static str {
        match self {
            LevelKind::Support => "Support",
            LevelKind::Resistance => "Resistance",
            LevelKind::Pivot => "Pivot",
            LevelKind::Current => "Current",
        }
    }
}

/// A support/resistance/pivot level with confidence and rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLevel {
    /// Level price, always positive.
    pub price: f64,
    /// Level classification.
    #[serde(rename = "type")]
    pub kind: LevelKind,
    /// Confidence level (0-100).
    pub confidence: f64,
    /// Human-readable rationale for the level.
    pub description: String,
    /// Signed percentage distance from the current price.
    pub distance_pct: f64,
}
