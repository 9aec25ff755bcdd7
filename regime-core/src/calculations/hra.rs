//! HRA exemption: the statutory three-way minimum rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::clamp_non_negative;

/// Share of basic pay exempt for metro-city tenants.
const METRO_BASIC_FACTOR: Decimal = dec!(0.50);

/// Share of basic pay exempt outside metro cities.
const NON_METRO_BASIC_FACTOR: Decimal = dec!(0.40);

/// Rent in excess of this share of basic pay counts towards the exemption.
const RENT_EXCESS_FACTOR: Decimal = dec!(0.10);

/// Computes the exempt portion of house rent allowance.
///
/// The exemption is the least of:
/// 1. HRA actually received,
/// 2. rent paid minus 10% of basic pay (floored at zero),
/// 3. 50% of basic pay in a metro city, 40% otherwise.
///
/// Without basic pay, HRA, or rent there is no exemption: any of the three
/// being zero or negative returns zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::hra_exemption;
///
/// let exempt = hra_exemption(dec!(600000), dec!(300000), dec!(240000), true);
/// assert_eq!(exempt, dec!(180000.0)); // rent minus 10% of basic wins
/// ```
pub fn hra_exemption(
    basic: Decimal,
    hra_received: Decimal,
    rent_paid: Decimal,
    is_metro: bool,
) -> Decimal {
    if basic <= Decimal::ZERO || hra_received <= Decimal::ZERO || rent_paid <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let rent_excess = clamp_non_negative(rent_paid - RENT_EXCESS_FACTOR * basic);
    let basic_share = if is_metro {
        METRO_BASIC_FACTOR * basic
    } else {
        NON_METRO_BASIC_FACTOR * basic
    };

    clamp_non_negative(hra_received.min(rent_excess).min(basic_share))
}
