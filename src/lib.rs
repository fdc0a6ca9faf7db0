//! Sales Toolkit - calculation core for insurance sales dashboards
//!
//! This library provides:
//! - Compound-interest illustrations (lump sum plus monthly contributions)
//! - Policy cash value rescaling and side-by-side product comparison
//! - Estate tax assessment with liquidity gap and insurance sizing
//! - Medical reimbursement plan comparison
//!
//! Every calculation is a pure function of its inputs. Rendering, formatting
//! and persistence belong to the callers.

pub mod error;
pub mod projection;
pub mod products;
pub mod estate;
pub mod medical;
pub mod reference;
pub mod toolkit;

// Re-export commonly used types
pub use error::{Result, ToolkitError};
pub use projection::{FinancialProjector, GrowthInputs, ProjectionPoint};
pub use products::{CashValueScaler, CashValueSeries, PremiumPlan, ProductPreset};
pub use estate::{BracketTable, EstateAssessment, EstateTaxCalculator, TaxBracket};
pub use medical::{ClaimScenario, MedicalPlan};
pub use reference::ReferenceData;
pub use toolkit::Toolkit;
