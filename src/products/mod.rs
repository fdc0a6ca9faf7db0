//! Policy cash value curves and product comparison

mod cash_value;
pub mod comparison;

pub use cash_value::{CashValueScaler, CashValueSeries};
pub use comparison::{compare, Comparison, ComparisonRow, PremiumPlan, ProductLine, ProductPreset};
