//! Core tax computation engine for comparing India's Old and New personal
//! income-tax regimes.
//!
//! Given annual salary components and deduction line items, this crate
//! computes the payable tax under both regimes for a selected assessment
//! year and recommends the cheaper one. Everything here is synchronous,
//! stateless, pure computation: rule tables are compiled-in immutable
//! constants, and a calculation request touches no I/O.
//!
//! The surrounding web application (authentication, document upload,
//! AI-assisted payslip extraction, persistence, HTTP routing) lives
//! elsewhere and calls in through [`compare_regimes`].

pub mod calculations;
pub mod models;
pub mod rules;

pub use calculations::compare::compare_regimes;
pub use models::*;
pub use rules::{resolve_rule_table, rule_table};
