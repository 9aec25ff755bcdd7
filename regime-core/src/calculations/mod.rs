//! Tax calculation modules for the Old vs New regime comparison.
//!
//! Leaf functions first (slab tax, HRA exemption, deduction caps), composed
//! by the per-regime calculators and finally the comparator. Everything is
//! a pure function of its inputs and the selected rule table.

pub mod common;
pub mod compare;
pub mod deductions;
pub mod hra;
pub mod regime;
pub mod slab;

pub use compare::compare_regimes;
pub use deductions::aggregate_deductions;
pub use hra::hra_exemption;
pub use regime::RegimeCalculator;
pub use slab::slab_tax;
