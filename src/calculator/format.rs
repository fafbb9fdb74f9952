//! Fixed numeric display format for results and the expression trace.

/// Maximum number of fractional digits shown.
pub const MAX_FRACTION_DIGITS: usize = 4;

/// Format a number for display.
///
/// At most four fractional digits, at least one integer digit, trailing
/// fractional zeros trimmed. Non-finite values render as `NaN`, `∞` or `-∞`.
///
/// Always returns `Some` for an `f64`: `{:.4}` keeps at least one integer
/// digit, so trimming never empties the text. The `Option` lets callers keep
/// a fallback path for a value that cannot be rendered.
pub fn format_number(value: f64) -> Option<String> {
    if value.is_nan() {
        return Some("NaN".to_string());
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() { "∞" } else { "-∞" };
        return Some(text.to_string());
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // Rounding can leave "-0" behind for tiny negatives
    if trimmed == "-0" {
        return Some("0".to_string());
    }

    Some(trimmed.to_string())
}

/// Format a number, falling back to an empty string.
pub(crate) fn format_or_empty(value: f64) -> String {
    format_number(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_number(5.0).as_deref(), Some("5"));
        assert_eq!(format_number(-12.0).as_deref(), Some("-12"));
        assert_eq!(format_number(0.0).as_deref(), Some("0"));
        assert_eq!(format_number(1000000.0).as_deref(), Some("1000000"));
    }

    #[test]
    fn test_fraction_limited_to_four_digits() {
        assert_eq!(format_number(1.0 / 3.0).as_deref(), Some("0.3333"));
        assert_eq!(format_number(std::f64::consts::PI).as_deref(), Some("3.1416"));
        assert_eq!(format_number(2.5).as_deref(), Some("2.5"));
        assert_eq!(format_number(0.125).as_deref(), Some("0.125"));
    }

    #[test]
    fn test_leading_zero_kept() {
        assert_eq!(format_number(0.5).as_deref(), Some("0.5"));
        assert_eq!(format_number(-0.25).as_deref(), Some("-0.25"));
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(format_number(0.00001).as_deref(), Some("0"));
        assert_eq!(format_number(-0.00001).as_deref(), Some("0"));
        assert_eq!(format_number(-0.0).as_deref(), Some("0"));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::NAN).as_deref(), Some("NaN"));
        assert_eq!(format_number(f64::INFINITY).as_deref(), Some("∞"));
        assert_eq!(format_number(f64::NEG_INFINITY).as_deref(), Some("-∞"));
    }
}
