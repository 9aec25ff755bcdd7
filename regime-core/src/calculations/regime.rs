//! Per-regime tax calculators.
//!
//! Both regimes share the same skeleton: subtract the deductions the
//! regime allows, run the slab computation, apply the Section 87A rebate,
//! then add cess. They differ only in which deductions apply and which
//! slab list and rebate limit the rule table supplies:
//!
//! | Step               | Old regime                          | New regime            |
//! |--------------------|-------------------------------------|-----------------------|
//! | Standard deduction | `standard_deduction_old`            | `standard_deduction_new` |
//! | Chapter VI-A + HRA | full [`DeductionSummary`] total     | none                  |
//! | Slabs              | `old_regime_slabs`                  | `new_regime_slabs`    |
//! | 87A rebate limit   | `old_regime_rebate_limit`           | `new_regime_rebate_limit` |
//! | Cess               | `cess_rate` on positive tax         | same                  |
//!
//! The rebate is an all-or-nothing cliff: taxable income at or below the
//! limit zeroes the tax entirely, one rupee above it pays full slab tax.
//! Real law grants marginal relief just above the threshold; this engine
//! keeps the simplified cliff, so any change there is a deliberate
//! behavioral deviation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::RegimeCalculator;
//! use regime_core::{AssessmentYear, rule_table};
//!
//! let calc = RegimeCalculator::new(rule_table(AssessmentYear::Ay2025_26));
//! let result = calc.new_regime(dec!(897600));
//!
//! assert_eq!(result.taxable_income, 822600);
//! assert_eq!(result.tax_payable, 33550);
//! ```

use rust_decimal::Decimal;

use crate::calculations::common::{clamp_non_negative, to_whole_rupees};
use crate::calculations::slab::slab_tax;
use crate::models::{DeductionSummary, RegimeResult, RuleTable, TaxSlab};

/// Computes payable tax under either regime for one rule table.
///
/// Pure: both methods depend only on their arguments and the borrowed
/// table, so the two regime runs share no state and may happen in any
/// order.
#[derive(Debug, Clone)]
pub struct RegimeCalculator<'a> {
    table: &'a RuleTable,
}

impl<'a> RegimeCalculator<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Old-regime tax: standard deduction plus the capped Chapter VI-A
    /// and HRA totals come off the gross income before the slab walk.
    pub fn old_regime(
        &self,
        gross_income: Decimal,
        deductions: &DeductionSummary,
    ) -> RegimeResult {
        let taxable = self.taxable_income(
            gross_income,
            self.table.standard_deduction_old + deductions.total_deductions,
        );
        self.result(
            taxable,
            &self.table.old_regime_slabs,
            self.table.old_regime_rebate_limit,
        )
    }

    /// New-regime tax: only the standard deduction applies; the new
    /// regime disallows Chapter VI-A deductions.
    pub fn new_regime(&self, gross_income: Decimal) -> RegimeResult {
        let taxable = self.taxable_income(gross_income, self.table.standard_deduction_new);
        self.result(
            taxable,
            &self.table.new_regime_slabs,
            self.table.new_regime_rebate_limit,
        )
    }

    fn taxable_income(&self, gross_income: Decimal, deductions: Decimal) -> Decimal {
        clamp_non_negative(gross_income - deductions)
    }

    /// Slab tax with the 87A cliff: at or below the rebate limit the whole
    /// liability is waived.
    fn tax_before_cess(
        &self,
        taxable_income: Decimal,
        slabs: &[TaxSlab],
        rebate_limit: Decimal,
    ) -> Decimal {
        if taxable_income <= rebate_limit {
            return Decimal::ZERO;
        }
        slab_tax(taxable_income, slabs)
    }

    /// Adds health-and-education cess; zero tax stays zero.
    fn with_cess(&self, tax_before_cess: Decimal) -> Decimal {
        if tax_before_cess > Decimal::ZERO {
            tax_before_cess * (Decimal::ONE + self.table.cess_rate)
        } else {
            Decimal::ZERO
        }
    }

    fn result(
        &self,
        taxable_income: Decimal,
        slabs: &[TaxSlab],
        rebate_limit: Decimal,
    ) -> RegimeResult {
        let before_cess = self.tax_before_cess(taxable_income, slabs, rebate_limit);
        RegimeResult {
            taxable_income: to_whole_rupees(taxable_income),
            tax_payable: to_whole_rupees(self.with_cess(before_cess)),
        }
    }
}
