//! Old-vs-new regime comparison: the engine's single entry point.

use tracing::debug;

use crate::calculations::common::{clamp_non_negative, to_whole_rupees};
use crate::calculations::deductions::aggregate_deductions;
use crate::calculations::regime::RegimeCalculator;
use crate::models::{AssessmentYear, ComparisonResult, IncomeInputs, RecommendedRegime};
use crate::rules::rule_table;

/// Runs both regime calculations over the same income and returns the
/// comparison with a recommendation.
///
/// Gross salary is basic + HRA + special allowance + LTA; other income
/// joins it to form gross total income, and professional tax comes off
/// before either regime runs (it reduces income chargeable under salaries
/// rather than acting as a Chapter VI-A deduction).
///
/// `tax_savings_new_vs_old` is old minus new: positive means the new
/// regime is cheaper. Ties recommend [`RecommendedRegime::Either`].
///
/// Never fails for well-formed non-negative numeric input; unknown
/// assessment years resolve to the latest table. Callers must coerce
/// malformed numeric fields to zero before building [`IncomeInputs`].
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::{IncomeInputs, RecommendedRegime, compare_regimes};
///
/// let inputs = IncomeInputs {
///     basic: dec!(600000),
///     hra: dec!(300000),
///     epf_contribution: dec!(72000),
///     professional_tax: dec!(2400),
///     rent_paid: dec!(240000),
///     is_metro_city: true,
///     assessment_year: "2025-26".to_string(),
///     ..IncomeInputs::default()
/// };
///
/// let result = compare_regimes(&inputs);
///
/// assert_eq!(result.gross_total_income, 900000);
/// assert_eq!(result.recommended_regime, RecommendedRegime::Old);
/// ```
pub fn compare_regimes(inputs: &IncomeInputs) -> ComparisonResult {
    let year = AssessmentYear::resolve(&inputs.assessment_year);
    let table = rule_table(year);

    let gross_salary = inputs.basic + inputs.hra + inputs.special + inputs.lta;
    let gross_total_income = gross_salary + inputs.other_income;
    let income_chargeable = clamp_non_negative(gross_total_income - inputs.professional_tax);

    let deductions = aggregate_deductions(inputs);
    let calculator = RegimeCalculator::new(table);
    let old = calculator.old_regime(income_chargeable, &deductions);
    let new = calculator.new_regime(income_chargeable);

    let tax_savings_new_vs_old = old.tax_payable - new.tax_payable;
    let recommended_regime = recommend(old.tax_payable, new.tax_payable);

    debug!(
        assessment_year = year.as_str(),
        gross_total_income = %gross_total_income,
        tax_payable_old = old.tax_payable,
        tax_payable_new = new.tax_payable,
        recommended = recommended_regime.as_str(),
        "regime comparison computed"
    );

    ComparisonResult {
        gross_total_income: to_whole_rupees(gross_total_income),
        net_taxable_income_old: old.taxable_income,
        net_taxable_income_new: new.taxable_income,
        tax_payable_old: old.tax_payable,
        tax_payable_new: new.tax_payable,
        recommended_regime,
        tax_savings_new_vs_old,
    }
}

fn recommend(tax_payable_old: i64, tax_payable_new: i64) -> RecommendedRegime {
    if tax_payable_new < tax_payable_old {
        RecommendedRegime::New
    } else if tax_payable_old < tax_payable_new {
        RecommendedRegime::Old
    } else {
        RecommendedRegime::Either
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn recommend_prefers_cheaper_regime() {
        assert_eq!(recommend(100, 50), RecommendedRegime::New);
        assert_eq!(recommend(50, 100), RecommendedRegime::Old);
    }

    #[test]
    fn recommend_returns_either_on_tie() {
        assert_eq!(recommend(0, 0), RecommendedRegime::Either);
        assert_eq!(recommend(12345, 12345), RecommendedRegime::Either);
    }

    #[test]
    fn gross_total_income_includes_all_salary_components() {
        let inputs = IncomeInputs {
            basic: dec!(500000),
            hra: dec!(200000),
            special: dec!(100000),
            lta: dec!(30000),
            other_income: dec!(20000),
            assessment_year: "2025-26".to_string(),
            ..IncomeInputs::default()
        };

        let result = compare_regimes(&inputs);

        assert_eq!(result.gross_total_income, 850000);
    }

    #[test]
    fn professional_tax_reduces_income_before_both_regimes() {
        let base = IncomeInputs {
            basic: dec!(900000),
            assessment_year: "2025-26".to_string(),
            ..IncomeInputs::default()
        };
        let with_pt = IncomeInputs {
            professional_tax: dec!(2400),
            ..base.clone()
        };

        let without = compare_regimes(&base);
        let with = compare_regimes(&with_pt);

        assert_eq!(without.gross_total_income, with.gross_total_income);
        assert_eq!(with.net_taxable_income_old, without.net_taxable_income_old - 2400);
        assert_eq!(with.net_taxable_income_new, without.net_taxable_income_new - 2400);
    }

    #[test]
    fn professional_tax_exceeding_income_clamps_to_zero() {
        let inputs = IncomeInputs {
            basic: dec!(1000),
            professional_tax: dec!(5000),
            ..IncomeInputs::default()
        };

        let result = compare_regimes(&inputs);

        assert_eq!(result.net_taxable_income_old, 0);
        assert_eq!(result.net_taxable_income_new, 0);
        assert_eq!(result.recommended_regime, RecommendedRegime::Either);
    }

    #[test]
    fn savings_sign_follows_old_minus_new() {
        // High gross, no itemized deductions: new regime wins, so the
        // delta is positive.
        let inputs = IncomeInputs {
            basic: dec!(1500000),
            assessment_year: "2025-26".to_string(),
            ..IncomeInputs::default()
        };

        let result = compare_regimes(&inputs);

        assert_eq!(
            result.tax_savings_new_vs_old,
            result.tax_payable_old - result.tax_payable_new
        );
        assert!(result.tax_savings_new_vs_old > 0);
        assert_eq!(result.recommended_regime, RecommendedRegime::New);
    }
}
