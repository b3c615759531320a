//! Money helpers built on `rust_decimal`
//!
//! Amounts travel as `Decimal` in the API and are persisted as integer
//! minor units (cents). All rounding is 2 decimal places, half away from zero.

use rust_decimal::prelude::*;

/// Decimal places kept for monetary values
pub const DECIMAL_PLACES: u32 = 2;

/// Upper bound accepted for any single amount (prices, payments, movements)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a decimal amount to integer cents
///
/// Returns `None` when the value does not fit in an `i64`.
pub fn to_cents(value: Decimal) -> Option<i64> {
    (round_money(value) * Decimal::ONE_HUNDRED).to_i64()
}

/// Convert integer cents back to a decimal amount
#[inline]
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// Subtotal for an area-priced (made-to-order) line
pub fn area_subtotal(unit_price: Decimal, width: Decimal, height: Decimal) -> Decimal {
    round_money(unit_price * width * height)
}

/// True when `value` is strictly positive and within [`MAX_AMOUNT`]
pub fn is_valid_amount(value: Decimal) -> bool {
    value > Decimal::ZERO && value <= MAX_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_cents_conversion() {
        assert_eq!(to_cents(dec("15.00")), Some(1500));
        assert_eq!(to_cents(dec("0.005")), Some(1));
        assert_eq!(to_cents(dec("-0.005")), Some(-1));
        assert_eq!(from_cents(1234), dec("12.34"));
        assert_eq!(from_cents(0), Decimal::ZERO);
    }

    #[test]
    fn test_area_subtotal() {
        assert_eq!(area_subtotal(dec("2.00"), dec("2"), dec("3")), dec("12.00"));
        // 1.333 * 1.5 * 1 = 1.9995 -> 2.00
        assert_eq!(area_subtotal(dec("1.333"), dec("1.5"), dec("1")), dec("2.00"));
    }

    #[test]
    fn test_amount_bounds() {
        assert!(is_valid_amount(dec("0.01")));
        assert!(is_valid_amount(MAX_AMOUNT));
        assert!(!is_valid_amount(Decimal::ZERO));
        assert!(!is_valid_amount(dec("-1")));
        assert!(!is_valid_amount(MAX_AMOUNT + dec("0.01")));
    }
}
