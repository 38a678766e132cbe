//! Parse-and-clamp helpers applied at every numeric mutator boundary.
//!
//! Money and quantities are exact decimals. Raw input that is not a number,
//! or is negative, becomes zero instead of an error. Products and sums of
//! non-negative amounts saturate at `Decimal::MAX` instead of overflowing.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Clamp a value to zero from below
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Parse raw user text into a non-negative amount
///
/// Surrounding whitespace and thousands separators are ignored. Anything that
/// still fails to parse yields zero.
pub fn coerce_amount(raw: &str) -> Decimal {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    let parsed = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO);

    clamp_non_negative(parsed)
}

/// Convert a float from an external source, mapping NaN, infinities and
/// negatives to zero
pub fn coerce_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    // f64 Display is the shortest round-trip form, so 0.1 stays 0.1
    Decimal::from_str(&value.to_string())
        .map(clamp_non_negative)
        .unwrap_or(Decimal::ZERO)
}

/// Product of two non-negative amounts, capped at `Decimal::MAX`
pub fn saturating_product(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// Sum of two non-negative amounts, capped at `Decimal::MAX`
pub fn saturating_sum(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

/// Sum of many non-negative amounts, capped at `Decimal::MAX`
pub fn total_of(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, saturating_sum)
}

/// Whole rupees of an amount, fractional part floored
///
/// Every `Decimal` fits in `u128`, so no amount is truncated.
pub fn whole_units(value: Decimal) -> u128 {
    clamp_non_negative(value)
        .floor()
        .to_u128()
        .unwrap_or(u128::MAX)
}
