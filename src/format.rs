//! Price formatting for human-readable rationales.

/// Format a positive price with precision scaled to its magnitude:
/// thousands get 2 decimals with separators, single-digit-and-up prices
/// get 4, and sub-unit prices keep 8 for micro-cap quotes.
pub fn format_price(price: f64) -> String {
    if price >= 1000.0 {
        let formatted = format!("{:.2}", price);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (formatted, String::new()),
        };
        format!("${}.{}", group_thousands(&int_part), frac_part)
    } else if price >= 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.8}", price)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(98765.432), "$98,765.43");
        assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_units() {
        assert_eq!(format_price(12.3456789), "$12.3457");
        assert_eq!(format_price(1.0), "$1.0000");
        assert_eq!(format_price(999.99), "$999.9900");
    }

    #[test]
    fn test_format_price_sub_unit() {
        assert_eq!(format_price(0.00012345), "$0.00012345");
        assert_eq!(format_price(0.5), "$0.50000000");
    }

    #[test]
    fn test_format_price_boundary() {
        assert_eq!(format_price(1000.0), "$1,000.00");
    }
}
