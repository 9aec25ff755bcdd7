use serde::{Deserialize, Serialize};

/// Which regime the comparison recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedRegime {
    Old,
    New,
    Either,
}

impl RecommendedRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
            Self::Either => "either",
        }
    }
}

/// The externally visible output of one calculation request.
///
/// All monetary fields are whole rupees. `tax_savings_new_vs_old` is
/// signed: positive means the new regime is cheaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub gross_total_income: i64,
    pub net_taxable_income_old: i64,
    pub net_taxable_income_new: i64,
    pub tax_payable_old: i64,
    pub tax_payable_new: i64,
    pub recommended_regime: RecommendedRegime,
    pub tax_savings_new_vs_old: i64,
}
