mod assessment_year;
mod comparison_result;
mod deduction_summary;
mod income_inputs;
mod regime_result;
mod rule_table;

pub use assessment_year::AssessmentYear;
pub use comparison_result::{ComparisonResult, RecommendedRegime};
pub use deduction_summary::DeductionSummary;
pub use income_inputs::IncomeInputs;
pub use regime_result::RegimeResult;
pub use rule_table::{RuleTable, RuleTableError, TaxSlab};
