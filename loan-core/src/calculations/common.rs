//! Common utility functions for loan calculations.
//!
//! The payment formula runs in `f64`; these helpers move results into
//! [`Decimal`] currency values rounded the way they are displayed.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a floating-point amount into a currency [`Decimal`] rounded to cents.
///
/// NaN, infinities, and values outside the `Decimal` range map to zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use loan_core::calculations::common::to_currency;
///
/// assert_eq!(to_currency(120.783_607), dec!(120.78));
/// assert_eq!(to_currency(f64::NAN), dec!(0));
/// ```
pub fn to_currency(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value)
        .map(round_half_up)
        .unwrap_or(Decimal::ZERO)
}

/// Whether [`to_currency`] can represent `value` without collapsing it to zero.
pub fn fits_currency(value: f64) -> bool {
    value.is_finite() && Decimal::from_f64(value).is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(120.784));

        assert_eq!(result, dec!(120.78));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(120.785));

        assert_eq!(result, dec!(120.79));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-0.125));

        assert_eq!(result, dec!(-0.13));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // to_currency tests
    // =========================================================================

    #[test]
    fn to_currency_rounds_to_cents() {
        let result = to_currency(599.550_525_152_756_9);

        assert_eq!(result, dec!(599.55));
    }

    #[test]
    fn to_currency_keeps_whole_amounts() {
        let result = to_currency(10000.0);

        assert_eq!(result, dec!(10000.00));
    }

    #[test]
    fn to_currency_maps_nan_to_zero() {
        assert_eq!(to_currency(f64::NAN), Decimal::ZERO);
    }

    #[test]
    fn to_currency_maps_infinity_to_zero() {
        assert_eq!(to_currency(f64::INFINITY), Decimal::ZERO);
        assert_eq!(to_currency(f64::NEG_INFINITY), Decimal::ZERO);
    }

    #[test]
    fn to_currency_maps_out_of_range_to_zero() {
        assert_eq!(to_currency(1e40), Decimal::ZERO);
    }

    // =========================================================================
    // fits_currency tests
    // =========================================================================

    #[test]
    fn fits_currency_accepts_ordinary_amounts() {
        assert!(fits_currency(120.78));
        assert!(fits_currency(0.0));
        assert!(fits_currency(1.0e28));
    }

    #[test]
    fn fits_currency_rejects_unrepresentable_amounts() {
        assert!(!fits_currency(3.0e29));
        assert!(!fits_currency(f64::INFINITY));
        assert!(!fits_currency(f64::NAN));
    }
}
