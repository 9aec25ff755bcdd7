//! Year-versioned rule tables for the Old and New regimes.
//!
//! One [`RuleTable`] per supported assessment year, built and validated
//! exactly once per process behind a [`OnceLock`]. The tables are plain
//! data; all arithmetic lives in [`crate::calculations`].
//!
//! # Supported years
//!
//! | Assessment year | Financial year | New-regime standard deduction |
//! |-----------------|----------------|-------------------------------|
//! | 2024-25         | 2023-24        | 50,000                        |
//! | 2025-26         | 2024-25        | 75,000                        |
//!
//! Old-regime slabs and the Section 87A limits (5,00,000 old / 7,00,000
//! new) are the same for both years; the new-regime slab breakpoints were
//! revised for FY 2024-25.

use std::sync::OnceLock;

use rust_decimal_macros::dec;

use crate::models::{AssessmentYear, RuleTable, TaxSlab};

struct RuleSet {
    ay_2024_25: RuleTable,
    ay_2025_26: RuleTable,
}

static RULES: OnceLock<RuleSet> = OnceLock::new();

fn rules() -> &'static RuleSet {
    RULES.get_or_init(|| {
        let set = RuleSet {
            ay_2024_25: table_ay_2024_25(),
            ay_2025_26: table_ay_2025_26(),
        };
        // Built-in tables are checked once at first use; a failure here is
        // a programming error in the constants below, so fail fast.
        set.ay_2024_25
            .validate()
            .expect("built-in AY 2024-25 rule table is invalid");
        set.ay_2025_26
            .validate()
            .expect("built-in AY 2025-26 rule table is invalid");
        set
    })
}

/// Returns the rule table for the given assessment year.
///
/// Total function: every [`AssessmentYear`] variant has a table.
pub fn rule_table(year: AssessmentYear) -> &'static RuleTable {
    let rules = rules();
    match year {
        AssessmentYear::Ay2024_25 => &rules.ay_2024_25,
        AssessmentYear::Ay2025_26 => &rules.ay_2025_26,
    }
}

/// Resolves a raw assessment-year string and returns its rule table.
///
/// Empty or unknown strings fall back to the latest year (see
/// [`AssessmentYear::resolve`]); this never fails.
pub fn resolve_rule_table(assessment_year: &str) -> &'static RuleTable {
    rule_table(AssessmentYear::resolve(assessment_year))
}

/// Old-regime slabs, unchanged between the supported years.
fn old_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab::new(dec!(0), dec!(0)),
        TaxSlab::new(dec!(250000), dec!(0.05)),
        TaxSlab::new(dec!(500000), dec!(0.20)),
        TaxSlab::new(dec!(1000000), dec!(0.30)),
    ]
}

fn table_ay_2024_25() -> RuleTable {
    RuleTable {
        assessment_year: AssessmentYear::Ay2024_25,
        old_regime_slabs: old_regime_slabs(),
        new_regime_slabs: vec![
            TaxSlab::new(dec!(0), dec!(0)),
            TaxSlab::new(dec!(300000), dec!(0.05)),
            TaxSlab::new(dec!(600000), dec!(0.10)),
            TaxSlab::new(dec!(900000), dec!(0.15)),
            TaxSlab::new(dec!(1200000), dec!(0.20)),
            TaxSlab::new(dec!(1500000), dec!(0.30)),
        ],
        old_regime_rebate_limit: dec!(500000),
        new_regime_rebate_limit: dec!(700000),
        cess_rate: dec!(0.04),
        standard_deduction_old: dec!(50000),
        standard_deduction_new: dec!(50000),
    }
}

fn table_ay_2025_26() -> RuleTable {
    RuleTable {
        assessment_year: AssessmentYear::Ay2025_26,
        old_regime_slabs: old_regime_slabs(),
        new_regime_slabs: vec![
            TaxSlab::new(dec!(0), dec!(0)),
            TaxSlab::new(dec!(300000), dec!(0.05)),
            TaxSlab::new(dec!(700000), dec!(0.10)),
            TaxSlab::new(dec!(1000000), dec!(0.15)),
            TaxSlab::new(dec!(1200000), dec!(0.20)),
            TaxSlab::new(dec!(1500000), dec!(0.30)),
        ],
        old_regime_rebate_limit: dec!(500000),
        new_regime_rebate_limit: dec!(700000),
        cess_rate: dec!(0.04),
        standard_deduction_old: dec!(50000),
        standard_deduction_new: dec!(75000),
    }
}
