//! Estate tax and insurance planning calculations
//!
//! The net estate is gross assets less the exemption and statutory
//! deductions, floored at zero. Tax comes from a progressive bracket table
//! in quick-deduction form (`net * rate - subtractor`). The table is passed
//! in rather than fixed, so a different jurisdiction or tax year only needs
//! a different `BracketTable`.
//!
//! # Example
//!
//! ```rust
//! use sales_toolkit::estate::EstateTaxCalculator;
//!
//! let calc = EstateTaxCalculator::default();
//! let result = calc.assess(13_330.0, true, 0, 1_333.0, 553.0, 56.0, 138.0).unwrap();
//! assert_eq!(result.net_estate, 11_306.0);
//! ```

mod brackets;
mod calculator;

pub use brackets::{BracketTable, TaxBracket};
pub use calculator::{
    DeductionSchedule, EstateAssessment, EstateInputs, EstateTaxCalculator, InsurancePlan,
    PlanningAssumptions,
};
