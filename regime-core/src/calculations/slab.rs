//! Slab tax: progressive bracket computation over an ordered slab list.

use rust_decimal::Decimal;

use crate::models::TaxSlab;

/// Computes gross tax before cess for the given taxable income.
///
/// Slabs must be sorted ascending by threshold with the first threshold at
/// zero, as guaranteed by [`RuleTable::validate`](crate::RuleTable::validate).
/// The walk runs from the highest threshold downward: each slab taxes the
/// income above its threshold at its marginal rate and hands the remainder
/// down to the next slab. This is arithmetically identical to the textbook
/// ascending-bracket sum (verified against it in the tests below).
///
/// Zero or negative taxable income yields zero tax.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::slab_tax;
/// use regime_core::TaxSlab;
///
/// let slabs = vec![
///     TaxSlab::new(dec!(0), dec!(0)),
///     TaxSlab::new(dec!(250000), dec!(0.05)),
///     TaxSlab::new(dec!(500000), dec!(0.20)),
///     TaxSlab::new(dec!(1000000), dec!(0.30)),
/// ];
///
/// // 12,500 from the 5% slab + 100,000 from the 20% slab
/// assert_eq!(slab_tax(dec!(1000000), &slabs), dec!(112500.00));
/// ```
pub fn slab_tax(taxable_income: Decimal, slabs: &[TaxSlab]) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut remaining = taxable_income;
    let mut tax = Decimal::ZERO;
    for slab in slabs.iter().rev() {
        if remaining > slab.threshold {
            tax += (remaining - slab.threshold) * slab.rate;
            remaining = slab.threshold;
        }
    }
    tax
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    /// Textbook ascending-bracket reference: sum, per bracket, the income
    /// falling inside it times its marginal rate.
    fn ascending_reference(taxable_income: Decimal, slabs: &[TaxSlab]) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        for (i, slab) in slabs.iter().enumerate() {
            let upper = slabs
                .get(i + 1)
                .map(|next| next.threshold)
                .unwrap_or(taxable_income);
            if taxable_income > slab.threshold {
                let in_bracket = taxable_income.min(upper) - slab.threshold;
                tax += in_bracket * slab.rate;
            }
        }
        tax
    }

    fn old_regime_slabs() -> Vec<TaxSlab> {
        vec![
            TaxSlab::new(dec!(0), dec!(0)),
            TaxSlab::new(dec!(250000), dec!(0.05)),
            TaxSlab::new(dec!(500000), dec!(0.20)),
            TaxSlab::new(dec!(1000000), dec!(0.30)),
        ]
    }

    #[test]
    fn zero_income_yields_zero_tax() {
        assert_eq!(slab_tax(dec!(0), &old_regime_slabs()), dec!(0));
    }

    #[test]
    fn negative_income_yields_zero_tax() {
        assert_eq!(slab_tax(dec!(-50000), &old_regime_slabs()), dec!(0));
    }

    #[test]
    fn income_within_zero_rate_slab_yields_zero_tax() {
        assert_eq!(slab_tax(dec!(250000), &old_regime_slabs()), dec!(0));
    }

    #[test]
    fn income_in_second_slab_taxes_excess_only() {
        // (300000 - 250000) * 0.05
        assert_eq!(slab_tax(dec!(300000), &old_regime_slabs()), dec!(2500.00));
    }

    #[test]
    fn income_spanning_three_slabs_accumulates_each_bracket() {
        // 12500 + 100000 + 60000
        assert_eq!(slab_tax(dec!(1200000), &old_regime_slabs()), dec!(172500.00));
    }

    #[test]
    fn income_exactly_on_threshold_stays_in_lower_bracket() {
        // 500000 sits on the 20% slab boundary; only the 5% slab applies.
        assert_eq!(slab_tax(dec!(500000), &old_regime_slabs()), dec!(12500.00));
    }

    #[test]
    fn matches_ascending_reference_on_threshold_boundaries() {
        let slabs = old_regime_slabs();

        for slab in &slabs {
            let at = slab.threshold;
            let just_above = slab.threshold + dec!(1);
            assert_eq!(slab_tax(at, &slabs), ascending_reference(at, &slabs));
            assert_eq!(
                slab_tax(just_above, &slabs),
                ascending_reference(just_above, &slabs)
            );
        }
    }

    #[test]
    fn matches_ascending_reference_on_randomized_tables() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            // Random strictly-ascending slab table, first threshold 0.
            let slab_count = rng.random_range(2..=6);
            let mut threshold = Decimal::ZERO;
            let mut slabs = Vec::with_capacity(slab_count);
            for _ in 0..slab_count {
                let rate = Decimal::new(rng.random_range(0..40), 2);
                slabs.push(TaxSlab::new(threshold, rate));
                threshold += Decimal::from(rng.random_range(50_000..500_000u32));
            }

            let income = Decimal::from(rng.random_range(0..3_000_000u32));
            assert_eq!(
                slab_tax(income, &slabs),
                ascending_reference(income, &slabs),
                "income {income} over {slabs:?}"
            );
        }
    }
}
