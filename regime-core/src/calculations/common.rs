//! Shared helpers for the regime calculations: rupee rounding and
//! non-negative clamping.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Rounds to whole rupees using half-up rounding.
///
/// Values at exactly .50 round away from zero, matching standard financial
/// rounding for rupee amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_rupees;
///
/// assert_eq!(round_rupees(dec!(32884.49)), dec!(32884));
/// assert_eq!(round_rupees(dec!(32884.50)), dec!(32885));
/// ```
pub fn round_rupees(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value to zero from below.
///
/// Every subtraction boundary in the engine goes through this so that
/// over-aggressive deductions can never produce negative taxable income or
/// negative tax.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

/// Converts a rupee amount to a whole-rupee integer, rounding half-up.
///
/// Saturates at `i64::MAX` for amounts beyond the integer range; real
/// salary figures are nowhere near it.
pub fn to_whole_rupees(value: Decimal) -> i64 {
    round_rupees(value).to_i64().unwrap_or(i64::MAX)
}
