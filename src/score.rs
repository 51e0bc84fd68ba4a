//! Composite signal scoring.
//!
//! Turns an indicator snapshot into one directional signal. Each
//! available indicator casts weighted buy/sell votes; the winning side's
//! share of the total possible weight decides direction and confidence.

use crate::indicators::bollinger;
use crate::types::{keys, IndicatorSet, MarketMood, Signal, SignalDirection, SignalFactor};

/// Winning-vote ratio above which a signal upgrades to strong.
const STRONG_RATIO: f64 = 0.7;
/// Winning-vote ratio above which a directional signal fires at all.
const SIGNAL_RATIO: f64 = 0.5;

/// Score an indicator snapshot into a composite signal.
///
/// Missing indicators abstain; with nothing available the result is
/// hold at confidence 50. Never fails and never depends on anything
/// but the snapshot, so identical inputs give identical signals.
pub fn aggregate(indicators: &IndicatorSet) -> Signal {
    let mut buy_score: u32 = 0;
    let mut sell_score: u32 = 0;
    let mut total_possible: u32 = 0;
    let mut factors: Vec<SignalFactor> = Vec::new();

    // Oversold/overbought RSI, double weight at the extremes.
    if let Some(rsi) = indicators.get(keys::RSI) {
        total_possible += 2;
        if rsi < 30.0 {
            buy_score += 2;
            factors.push(factor("rsi", SignalDirection::Buy, 2));
        } else if rsi < 40.0 {
            buy_score += 1;
            factors.push(factor("rsi", SignalDirection::Buy, 1));
        } else if rsi > 70.0 {
            sell_score += 2;
            factors.push(factor("rsi", SignalDirection::Sell, 2));
        } else if rsi > 60.0 {
            sell_score += 1;
            factors.push(factor("rsi", SignalDirection::Sell, 1));
        }
    }

    // MACD crossover, extra weight when both lines agree on sign.
    if let (Some(macd), Some(signal)) = (
        indicators.get(keys::MACD),
        indicators.get(keys::MACD_SIGNAL),
    ) {
        total_possible += 2;
        if macd > signal {
            let weight = if macd > 0.0 && signal > 0.0 { 2 } else { 1 };
            buy_score += weight;
            factors.push(factor("macd", SignalDirection::Buy, weight));
        } else if macd < signal {
            let weight = if macd < 0.0 && signal < 0.0 { 2 } else { 1 };
            sell_score += weight;
            factors.push(factor("macd", SignalDirection::Sell, weight));
        }
    }

    // Golden/death-cross proxy with a 0.1% dead zone.
    if let (Some(fast), Some(slow)) = (
        indicators.get(keys::EMA_FAST),
        indicators.get(keys::EMA_SLOW),
    ) {
        total_possible += 1;
        let spread = (fast - slow) / slow.abs();
        if spread > 0.001 {
            buy_score += 1;
            factors.push(factor("ema_cross", SignalDirection::Buy, 1));
        } else if spread < -0.001 {
            sell_score += 1;
            factors.push(factor("ema_cross", SignalDirection::Sell, 1));
        }
    }

    // Band position, derived from price and bands when the precomputed
    // key is missing.
    let percent_b = indicators.get(keys::BB_PERCENT_B).or_else(|| {
        match (
            indicators.get(keys::PRICE),
            indicators.get(keys::BOLLINGER_UPPER),
            indicators.get(keys::BOLLINGER_LOWER),
        ) {
            (Some(price), Some(upper), Some(lower)) => {
                Some(bollinger::percent_b(price, upper, lower))
            }
            _ => None,
        }
    });
    if let Some(pb) = percent_b {
        total_possible += 1;
        if pb < 0.2 {
            buy_score += 1;
            factors.push(factor("bollinger", SignalDirection::Buy, 1));
        } else if pb > 0.8 {
            sell_score += 1;
            factors.push(factor("bollinger", SignalDirection::Sell, 1));
        }
    }

    if let Some(momentum) = indicators.get(keys::MOMENTUM_1W) {
        total_possible += 1;
        if momentum > 5.0 {
            buy_score += 1;
            factors.push(factor("momentum", SignalDirection::Buy, 1));
        } else if momentum < -5.0 {
            sell_score += 1;
            factors.push(factor("momentum", SignalDirection::Sell, 1));
        }
    }

    if total_possible == 0 {
        return Signal {
            direction: SignalDirection::Hold,
            confidence: 50.0,
            buy_score,
            sell_score,
            factors,
        };
    }

    let winning = buy_score.max(sell_score);
    let ratio = winning as f64 / total_possible as f64;
    let confidence = (ratio * 100.0).clamp(0.0, 100.0);

    let direction = if buy_score == sell_score {
        SignalDirection::Hold
    } else if buy_score > sell_score {
        if ratio > STRONG_RATIO {
            SignalDirection::StrongBuy
        } else if ratio > SIGNAL_RATIO {
            SignalDirection::Buy
        } else {
            SignalDirection::Hold
        }
    } else if ratio > STRONG_RATIO {
        SignalDirection::StrongSell
    } else if ratio > SIGNAL_RATIO {
        SignalDirection::Sell
    } else {
        SignalDirection::Hold
    };

    Signal {
        direction,
        confidence,
        buy_score,
        sell_score,
        factors,
    }
}

/// Broad market mood from daily momentum and RSI.
///
/// Missing inputs read as neutral defaults (no change, RSI 50), so the
/// fallback mood is always neutral.
pub fn market_mood(indicators: &IndicatorSet) -> MarketMood {
    let change = indicators.get(keys::MOMENTUM_1D).unwrap_or(0.0);
    let rsi = indicators.get(keys::RSI).unwrap_or(50.0);

    if change > 5.0 || (rsi > 65.0 && change > 2.0) {
        MarketMood::Bullish
    } else if change < -5.0 || (rsi < 35.0 && change < -2.0) {
        MarketMood::Bearish
    } else {
        MarketMood::Neutral
    }
}

fn factor(name: &str, direction: SignalDirection, weight: u32) -> SignalFactor {
    SignalFactor {
        name: name.to_string(),
        direction,
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, f64)]) -> IndicatorSet {
        let mut indicators = IndicatorSet::new();
        for (key, value) in entries {
            indicators.insert(key, *value);
        }
        indicators
    }

    #[test]
    fn test_aggregate_empty_is_hold_50() {
        let signal = aggregate(&IndicatorSet::new());
        assert_eq!(signal.direction, SignalDirection::Hold);
        assert_eq!(signal.confidence, 50.0);
        assert_eq!(signal.buy_score, 0);
        assert_eq!(signal.sell_score, 0);
        assert!(signal.factors.is_empty());
    }

    #[test]
    fn test_aggregate_unanimous_buy_is_strong() {
        let indicators = set(&[
            (keys::RSI, 25.0),
            (keys::MACD, 1.0),
            (keys::MACD_SIGNAL, 0.5),
            (keys::EMA_FAST, 110.0),
            (keys::EMA_SLOW, 100.0),
        ]);
        let signal = aggregate(&indicators);

        assert!(signal.buy_score >= 5);
        assert_eq!(signal.sell_score, 0);
        assert_eq!(signal.direction, SignalDirection::StrongBuy);
        assert_eq!(signal.confidence, 100.0);
    }

    #[test]
    fn test_aggregate_unanimous_sell_is_strong() {
        let indicators = set(&[
            (keys::RSI, 78.0),
            (keys::MACD, -1.0),
            (keys::MACD_SIGNAL, -0.5),
            (keys::EMA_FAST, 95.0),
            (keys::EMA_SLOW, 100.0),
        ]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 0);
        assert!(signal.sell_score >= 5);
        assert_eq!(signal.direction, SignalDirection::StrongSell);
    }

    #[test]
    fn test_aggregate_tie_is_hold() {
        // RSI votes +2 buy, MACD votes +2 sell.
        let indicators = set(&[
            (keys::RSI, 25.0),
            (keys::MACD, -1.0),
            (keys::MACD_SIGNAL, -0.5),
        ]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, signal.sell_score);
        assert_eq!(signal.direction, SignalDirection::Hold);
    }

    #[test]
    fn test_aggregate_weak_majority_is_hold() {
        // One buy vote out of two possible RSI votes: ratio exactly 0.5.
        let indicators = set(&[(keys::RSI, 35.0)]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 1);
        assert_eq!(signal.direction, SignalDirection::Hold);
        assert_eq!(signal.confidence, 50.0);
    }

    #[test]
    fn test_aggregate_neutral_rsi_abstains() {
        let indicators = set(&[(keys::RSI, 50.0)]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 0);
        assert_eq!(signal.sell_score, 0);
        assert_eq!(signal.direction, SignalDirection::Hold);
        assert_eq!(signal.confidence, 0.0);
        assert!(signal.factors.is_empty());
    }

    #[test]
    fn test_aggregate_macd_without_sign_agreement_single_weight() {
        let indicators = set(&[(keys::MACD, 0.5), (keys::MACD_SIGNAL, -0.2)]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 1);
        assert_eq!(signal.factors.len(), 1);
        assert_eq!(signal.factors[0].name, "macd");
        assert_eq!(signal.factors[0].weight, 1);
    }

    #[test]
    fn test_aggregate_ema_dead_zone_abstains() {
        // 0.05% spread sits inside the 0.1% dead zone.
        let indicators = set(&[(keys::EMA_FAST, 100.05), (keys::EMA_SLOW, 100.0)]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 0);
        assert_eq!(signal.sell_score, 0);
    }

    #[test]
    fn test_aggregate_percent_b_derived_from_bands() {
        let indicators = set(&[
            (keys::PRICE, 96.5),
            (keys::BOLLINGER_UPPER, 104.0),
            (keys::BOLLINGER_LOWER, 96.0),
        ]);
        let signal = aggregate(&indicators);

        assert_eq!(signal.buy_score, 1);
        assert_eq!(signal.factors[0].name, "bollinger");
    }

    #[test]
    fn test_aggregate_momentum_votes() {
        let bullish = aggregate(&set(&[(keys::MOMENTUM_1W, 6.0)]));
        assert_eq!(bullish.buy_score, 1);
        assert_eq!(bullish.direction, SignalDirection::StrongBuy);

        let bearish = aggregate(&set(&[(keys::MOMENTUM_1W, -6.0)]));
        assert_eq!(bearish.sell_score, 1);
        assert_eq!(bearish.direction, SignalDirection::StrongSell);

        let flat = aggregate(&set(&[(keys::MOMENTUM_1W, 2.0)]));
        assert_eq!(flat.buy_score + flat.sell_score, 0);
    }

    #[test]
    fn test_aggregate_deterministic() {
        let indicators = set(&[
            (keys::RSI, 35.0),
            (keys::MACD, 0.2),
            (keys::MACD_SIGNAL, 0.1),
            (keys::MOMENTUM_1W, 8.0),
        ]);
        let a = aggregate(&indicators);
        let b = aggregate(&indicators);

        assert_eq!(a.direction, b.direction);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.buy_score, b.buy_score);
        assert_eq!(a.sell_score, b.sell_score);
        assert_eq!(a.factors.len(), b.factors.len());
    }

    #[test]
    fn test_aggregate_confidence_in_range() {
        let snapshots = [
            set(&[(keys::RSI, 25.0)]),
            set(&[(keys::RSI, 75.0), (keys::MOMENTUM_1W, -10.0)]),
            set(&[(keys::RSI, 50.0), (keys::MOMENTUM_1W, 0.0)]),
            IndicatorSet::new(),
        ];
        for indicators in &snapshots {
            let signal = aggregate(indicators);
            assert!((0.0..=100.0).contains(&signal.confidence));
        }
    }

    #[test]
    fn test_mood_bullish_on_momentum() {
        let mood = market_mood(&set(&[(keys::MOMENTUM_1D, 6.0)]));
        assert_eq!(mood, MarketMood::Bullish);
    }

    #[test]
    fn test_mood_bullish_on_hot_rsi_with_mild_momentum() {
        let mood = market_mood(&set(&[(keys::MOMENTUM_1D, 3.0), (keys::RSI, 70.0)]));
        assert_eq!(mood, MarketMood::Bullish);
    }

    #[test]
    fn test_mood_bearish_on_drawdown() {
        let mood = market_mood(&set(&[(keys::MOMENTUM_1D, -7.0)]));
        assert_eq!(mood, MarketMood::Bearish);
    }

    #[test]
    fn test_mood_defaults_to_neutral() {
        assert_eq!(market_mood(&IndicatorSet::new()), MarketMood::Neutral);
        let mood = market_mood(&set(&[(keys::MOMENTUM_1D, 1.0), (keys::RSI, 55.0)]));
        assert_eq!(mood, MarketMood::Neutral);
    }
}
