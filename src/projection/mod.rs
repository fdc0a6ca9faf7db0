//! Compound-interest projections and yield calculations

mod state;
mod engine;
mod points;
pub mod irr;

pub use state::GrowthState;
pub use engine::{FinancialProjector, GrowthInputs, MAX_HORIZON_YEARS};
pub use points::{GrowthProjection, GrowthSummary, ProjectionPoint};
pub use irr::calculate_irr;
