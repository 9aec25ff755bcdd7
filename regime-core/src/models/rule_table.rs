use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::AssessmentYear;

/// Errors raised by [`RuleTable::validate`].
///
/// These can only surface at startup while the built-in tables are checked;
/// a validated table never fails mid-request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleTableError {
    /// A regime has no slabs at all.
    #[error("{regime} regime slab list is empty")]
    EmptySlabs { regime: &'static str },

    /// The first slab must start at zero so the table covers all income.
    #[error("{regime} regime first slab threshold must be 0, got {threshold}")]
    FirstThresholdNotZero {
        regime: &'static str,
        threshold: Decimal,
    },

    /// Slab thresholds must be strictly increasing.
    #[error("{regime} regime slab thresholds not strictly ascending at {threshold}")]
    ThresholdsNotAscending {
        regime: &'static str,
        threshold: Decimal,
    },

    /// A marginal rate outside `[0, 1)`.
    #[error("{regime} regime slab rate must be in [0, 1), got {rate}")]
    RateOutOfRange {
        regime: &'static str,
        rate: Decimal,
    },

    /// The cess rate must be a fraction in `[0, 1)`.
    #[error("cess rate must be in [0, 1), got {0}")]
    CessRateOutOfRange(Decimal),

    /// Rebate limits and standard deductions must be non-negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },
}

/// One marginal tax bracket: income above `threshold` (up to the next
/// slab's threshold) is taxed at `rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// Lower bound of the bracket, in rupees.
    pub threshold: Decimal,

    /// Marginal rate applied to income above the threshold, as a fraction.
    pub rate: Decimal,
}

impl TaxSlab {
    pub fn new(threshold: Decimal, rate: Decimal) -> Self {
        Self { threshold, rate }
    }
}

/// The complete rule set for one assessment year.
///
/// Immutable once built; [`crate::rules`] validates every built-in table at
/// startup so calculators can assume the slab invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    pub assessment_year: AssessmentYear,

    /// Old-regime slabs, sorted ascending by threshold, first threshold 0,
    /// last slab unbounded above.
    pub old_regime_slabs: Vec<TaxSlab>,

    /// New-regime slabs, same invariants as the old-regime list.
    pub new_regime_slabs: Vec<TaxSlab>,

    /// Section 87A limit for the old regime: taxable income at or below
    /// this zeroes the tax entirely.
    pub old_regime_rebate_limit: Decimal,

    /// Section 87A limit for the new regime.
    pub new_regime_rebate_limit: Decimal,

    /// Health and education cess, applied multiplicatively whenever
    /// tax-before-cess is positive.
    pub cess_rate: Decimal,

    /// Standard deduction from salary income under the old regime.
    pub standard_deduction_old: Decimal,

    /// Standard deduction from salary income under the new regime.
    pub standard_deduction_new: Decimal,
}

impl RuleTable {
    /// Checks the table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RuleTableError`] if either slab list is empty, does not
    /// start at zero, is not strictly ascending, or carries a rate outside
    /// `[0, 1)`; or if the cess rate, rebate limits, or standard deductions
    /// are out of range.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        Self::validate_slabs("old", &self.old_regime_slabs)?;
        Self::validate_slabs("new", &self.new_regime_slabs)?;

        if self.cess_rate < Decimal::ZERO || self.cess_rate >= Decimal::ONE {
            return Err(RuleTableError::CessRateOutOfRange(self.cess_rate));
        }

        let amounts = [
            ("old regime rebate limit", self.old_regime_rebate_limit),
            ("new regime rebate limit", self.new_regime_rebate_limit),
            ("old regime standard deduction", self.standard_deduction_old),
            ("new regime standard deduction", self.standard_deduction_new),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(RuleTableError::NegativeAmount { field, value });
            }
        }

        Ok(())
    }

    fn validate_slabs(
        regime: &'static str,
        slabs: &[TaxSlab],
    ) -> Result<(), RuleTableError> {
        let Some(first) = slabs.first() else {
            return Err(RuleTableError::EmptySlabs { regime });
        };

        if first.threshold != Decimal::ZERO {
            return Err(RuleTableError::FirstThresholdNotZero {
                regime,
                threshold: first.threshold,
            });
        }

        for pair in slabs.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(RuleTableError::ThresholdsNotAscending {
                    regime,
                    threshold: pair[1].threshold,
                });
            }
        }

        for slab in slabs {
            if slab.rate < Decimal::ZERO || slab.rate >= Decimal::ONE {
                return Err(RuleTableError::RateOutOfRange {
                    regime,
                    rate: slab.rate,
                });
            }
        }

        Ok(())
    }
}
