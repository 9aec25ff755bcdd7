use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Capped deduction totals usable under the Old Regime only.
///
/// Built fresh per request by the deduction aggregator and never mutated
/// afterwards. `total_deductions` excludes the standard deduction and
/// professional tax, which the regime calculators and comparator subtract
/// at the salary level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    /// Exempt portion of HRA under the three-way minimum rule.
    pub hra_exemption: Decimal,

    /// Section 80C total, capped at 150,000.
    pub capped_80c: Decimal,

    /// Section 80D total: self/family capped at 25,000 plus parents
    /// capped at 50,000, each capped independently before summing.
    pub capped_80d: Decimal,

    /// Section 80CCD(1B) NPS contribution, capped at 50,000.
    pub capped_80ccd1b: Decimal,

    /// Section 80TTA savings interest, capped at 10,000.
    pub capped_80tta: Decimal,

    /// Section 24(b) home loan interest, capped at 200,000.
    pub capped_24b: Decimal,

    /// Sum of everything above.
    pub total_deductions: Decimal,
}
