use serde::{Deserialize, Serialize};

/// Outcome of running one regime's calculation.
///
/// Amounts are whole rupees, rounded half-up; `tax_payable` includes cess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegimeResult {
    pub taxable_income: i64,
    pub tax_payable: i64,
}
