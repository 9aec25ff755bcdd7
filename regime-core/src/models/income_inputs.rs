use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw annual figures for one calculation request.
///
/// Field names on the wire match the calculator form and the payslip
/// extraction contract (camelCase, with the statutory section baked into
/// the deduction field names). Every numeric field defaults to zero when
/// absent; the caller is responsible for coercing malformed values to zero
/// before building this struct. Nothing here is persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeInputs {
    /// Annual basic pay.
    pub basic: Decimal,

    /// House rent allowance received.
    pub hra: Decimal,

    /// Special allowance.
    pub special: Decimal,

    /// Leave travel allowance.
    pub lta: Decimal,

    /// Income from other sources (interest, etc.).
    pub other_income: Decimal,

    /// Employee provident fund contribution; counts towards 80C.
    pub epf_contribution: Decimal,

    /// Professional tax, subtracted from salary income directly rather
    /// than treated as a Chapter VI-A deduction.
    pub professional_tax: Decimal,

    /// Annual rent paid, used for the HRA exemption.
    pub rent_paid: Decimal,

    /// Whether the rented home is in a metro city (50% HRA factor
    /// instead of 40%).
    pub is_metro_city: bool,

    /// Home loan interest, deductible under Section 24(b).
    pub home_loan_interest: Decimal,

    #[serde(rename = "deduction80C_ppf")]
    pub deduction_80c_ppf: Decimal,

    #[serde(rename = "deduction80C_elss")]
    pub deduction_80c_elss: Decimal,

    #[serde(rename = "deduction80C_insurance")]
    pub deduction_80c_insurance: Decimal,

    #[serde(rename = "deduction80C_housingLoanPrincipal")]
    pub deduction_80c_housing_loan_principal: Decimal,

    #[serde(rename = "deduction80C_tuition")]
    pub deduction_80c_tuition: Decimal,

    #[serde(rename = "deduction80D_selfFamily")]
    pub deduction_80d_self_family: Decimal,

    #[serde(rename = "deduction80D_parents")]
    pub deduction_80d_parents: Decimal,

    #[serde(rename = "deduction80CCD1B_nps")]
    pub deduction_80ccd1b_nps: Decimal,

    #[serde(rename = "deduction80TTA_savingsInterest")]
    pub deduction_80tta_savings_interest: Decimal,

    /// Assessment year as a string such as `"2025-26"`. Empty or unknown
    /// values resolve to the latest known year.
    pub assessment_year: String,
}
