use rust_decimal::Decimal;

use loan_core::calculations::common::round_half_up;

/// Normalizes free-text numeric input: trims whitespace and removes commas
/// (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a free-text form field into a number.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty,
/// non-numeric, or non-finite text (`"inf"`, `"NaN"`) yields `f64::NAN`, which
/// the calculator treats as failing its positivity checks. Invalid non-empty
/// text is logged as a warning.
pub fn parse_field(s: &str) -> f64 {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return f64::NAN;
    }
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            tracing::warn!(input = %s, "non-finite number {} treated as missing", value);
            f64::NAN
        }
        Err(e) => {
            tracing::warn!(input = %s, "invalid number: {}", e);
            f64::NAN
        }
    }
}

/// Like [`parse_field`], but empty text counts as zero. Used for the optional
/// down payment column in batch files.
pub fn parse_field_or_zero(s: &str) -> f64 {
    if s.trim().is_empty() {
        0.0
    } else {
        parse_field(s)
    }
}

/// Formats an amount as currency with exactly two decimals, e.g. `$120.78`.
pub fn format_currency(
    symbol: &str,
    amount: Decimal,
) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{symbol}{}", rounded.abs())
    } else {
        format!("{symbol}{}", rounded.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_field_accepts_plain_numbers() {
        assert_eq!(parse_field("5000"), 5000.0);
        assert_eq!(parse_field("5.5"), 5.5);
        assert_eq!(parse_field("-12"), -12.0);
    }

    #[test]
    fn parse_field_accepts_comma_thousands_separator() {
        assert_eq!(parse_field("1,234.56"), 1234.56);
        assert_eq!(parse_field("1,234,567"), 1_234_567.0);
    }

    #[test]
    fn parse_field_trims_whitespace() {
        assert_eq!(parse_field("  36  "), 36.0);
    }

    #[test]
    fn parse_field_empty_is_nan() {
        assert!(parse_field("").is_nan());
        assert!(parse_field("   ").is_nan());
    }

    #[test]
    fn parse_field_non_numeric_is_nan() {
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("12abc").is_nan());
        assert!(parse_field("$5000").is_nan());
    }

    #[test]
    fn parse_field_non_finite_is_nan() {
        assert!(parse_field("inf").is_nan());
        assert!(parse_field("-infinity").is_nan());
        assert!(parse_field("NaN").is_nan());
        assert!(parse_field("1e400").is_nan());
    }

    #[test]
    fn parse_field_or_zero_defaults_empty_to_zero() {
        assert_eq!(parse_field_or_zero(""), 0.0);
        assert_eq!(parse_field_or_zero("250"), 250.0);
        assert!(parse_field_or_zero("n/a").is_nan());
    }

    #[test]
    fn format_currency_always_shows_cents() {
        assert_eq!(format_currency("$", dec!(120.78)), "$120.78");
        assert_eq!(format_currency("$", dec!(1200)), "$1200.00");
        assert_eq!(format_currency("$", dec!(0.5)), "$0.50");
    }

    #[test]
    fn format_currency_rounds_half_up() {
        assert_eq!(format_currency("$", dec!(120.785)), "$120.79");
    }

    #[test]
    fn format_currency_places_sign_before_symbol() {
        assert_eq!(format_currency("€", dec!(-3.2)), "-€3.20");
    }
}
