//! Medical reimbursement plan comparison

mod plans;
pub mod claims;

pub use plans::MedicalPlan;
pub use claims::{estimate, rank, ClaimEstimate, ClaimScenario};
