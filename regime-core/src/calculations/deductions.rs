//! Deduction aggregation: per-section caps for the Old Regime.
//!
//! Each cap is a hard ceiling. Contributions beyond a cap are simply not
//! counted; oversized input is never an error.
//!
//! | Section   | Inputs summed                                        | Cap     |
//! |-----------|------------------------------------------------------|---------|
//! | 80C       | EPF + PPF + ELSS + insurance + tuition + principal   | 150,000 |
//! | 80D       | self/family premium                                  | 25,000  |
//! | 80D       | parents premium (capped separately, then added)      | 50,000  |
//! | 80CCD(1B) | NPS contribution                                     | 50,000  |
//! | 80TTA     | savings-account interest                             | 10,000  |
//! | 24(b)     | home-loan interest                                   | 200,000 |
//!
//! The HRA exemption joins the total; professional tax does not — it
//! reduces income chargeable under salaries and is subtracted by the
//! comparator, not claimed as a Chapter VI-A deduction.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::hra::hra_exemption;
use crate::models::{DeductionSummary, IncomeInputs};

const CAP_80C: Decimal = dec!(150000);
const CAP_80D_SELF_FAMILY: Decimal = dec!(25000);
const CAP_80D_PARENTS: Decimal = dec!(50000);
const CAP_80CCD1B: Decimal = dec!(50000);
const CAP_80TTA: Decimal = dec!(10000);
const CAP_24B: Decimal = dec!(200000);

/// Applies the per-section caps to the raw deduction line items.
pub fn aggregate_deductions(inputs: &IncomeInputs) -> DeductionSummary {
    let hra = hra_exemption(
        inputs.basic,
        inputs.hra,
        inputs.rent_paid,
        inputs.is_metro_city,
    );

    let total_80c = inputs.epf_contribution
        + inputs.deduction_80c_ppf
        + inputs.deduction_80c_elss
        + inputs.deduction_80c_insurance
        + inputs.deduction_80c_tuition
        + inputs.deduction_80c_housing_loan_principal;

    let capped_80c = total_80c.min(CAP_80C);
    let capped_80d = inputs.deduction_80d_self_family.min(CAP_80D_SELF_FAMILY)
        + inputs.deduction_80d_parents.min(CAP_80D_PARENTS);
    let capped_80ccd1b = inputs.deduction_80ccd1b_nps.min(CAP_80CCD1B);
    let capped_80tta = inputs.deduction_80tta_savings_interest.min(CAP_80TTA);
    let capped_24b = inputs.home_loan_interest.min(CAP_24B);

    let total_deductions =
        hra + capped_80c + capped_80d + capped_80ccd1b + capped_80tta + capped_24b;

    DeductionSummary {
        hra_exemption: hra,
        capped_80c,
        capped_80d,
        capped_80ccd1b,
        capped_80tta,
        capped_24b,
        total_deductions,
    }
}
