//! Momentum (rate of change).

/// Percentage change of the latest close versus the close `k` periods
/// earlier. `None` when fewer than `k + 1` closes exist or the reference
/// close is zero.
pub fn momentum(closes: &[f64], k: usize) -> Option<f64> {
    if k == 0 || closes.len() < k + 1 {
        return None;
    }

    let current = closes[closes.len() - 1];
    let past = closes[closes.len() - 1 - k];
    if past == 0.0 {
        return None;
    }

    Some((current - past) / past * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_insufficient_data() {
        assert!(momentum(&[100.0], 1).is_none());
        assert!(momentum(&[100.0, 101.0, 102.0], 7).is_none());
    }

    #[test]
    fn test_momentum_one_period() {
        let result = momentum(&[100.0, 110.0], 1).unwrap();
        assert!((result - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_negative_change() {
        let result = momentum(&[200.0, 150.0], 1).unwrap();
        assert!((result - -25.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_weekly_window() {
        let closes = vec![100.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 105.0];
        // Eight closes, so k=7 compares the last close against the first.
        let result = momentum(&closes, 7).unwrap();
        assert!((result - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_momentum_zero_reference() {
        assert!(momentum(&[0.0, 50.0], 1).is_none());
    }
}
