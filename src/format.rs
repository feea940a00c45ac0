//! Number formatting for the result region

/// Round to the nearest integer (halves toward +∞) and group digits in
/// threes with `,`.
pub fn format_view_count(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // Compare the fraction instead of adding 0.5, which can round up early
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };

    // Saturates beyond i128, far past any realistic count
    group_thousands(rounded as i128)
}

fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_and_groups() {
        assert_eq!(format_view_count(1234567.8), "1,234,568");
        assert_eq!(format_view_count(999.5), "1,000");
        assert_eq!(format_view_count(999.4), "999");
        assert_eq!(format_view_count(100000.0), "100,000");
        assert_eq!(format_view_count(0.0), "0");
        assert_eq!(format_view_count(0.49), "0");
        assert_eq!(format_view_count(0.49999999999999994), "0");
        assert_eq!(format_view_count(4503599627370497.0), "4,503,599,627,370,497");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_view_count(-1234.4), "-1,234");
        assert_eq!(format_view_count(-2.5), "-2");
        assert_eq!(format_view_count(-2.6), "-3");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_view_count(f64::NAN), "NaN");
        assert_eq!(format_view_count(f64::INFINITY), "∞");
        assert_eq!(format_view_count(f64::NEG_INFINITY), "-∞");
    }
}
