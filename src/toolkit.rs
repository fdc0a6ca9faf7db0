//! Request/response facade used by the dashboards
//!
//! Holds the reference tables and planning parameters once, then answers
//! any number of independent requests.
//!
//! # Example
//! ```
//! use sales_toolkit::{Toolkit, projection::GrowthInputs};
//!
//! let toolkit = Toolkit::new();
//! let projection = toolkit
//!     .grow(&GrowthInputs {
//!         initial_amount: 100_000.0,
//!         monthly_contribution: 5_000.0,
//!         annual_rate_percent: 5.0,
//!         horizon_years: 1,
//!     })
//!     .unwrap();
//! assert_eq!(projection.points[1].cumulative_principal, 160_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};
use crate::estate::{EstateAssessment, EstateInputs, EstateTaxCalculator, PlanningAssumptions};
use crate::medical::{rank, ClaimEstimate, ClaimScenario, MedicalPlan};
use crate::products::{compare, Comparison, PremiumPlan, ProductPreset};
use crate::projection::{FinancialProjector, GrowthInputs, GrowthProjection};
use crate::reference::ReferenceData;

/// Product comparison request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// Preset ids, in display order
    pub product_ids: Vec<String>,
    pub annual_premium: f64,
    pub pay_years: u32,
}

/// Medical claim ranking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRequest {
    /// Plans to include; all reference plans when absent
    #[serde(default)]
    pub plan_ids: Option<Vec<String>>,
    pub scenario: ClaimScenario,
}

/// Pre-loaded calculator set
#[derive(Debug, Clone)]
pub struct Toolkit {
    reference: ReferenceData,
    projector: FinancialProjector,
    estate: EstateTaxCalculator,
}

impl Toolkit {
    /// Toolkit over the process-wide reference tables
    pub fn new() -> Self {
        Self::with_reference(ReferenceData::global().clone(), PlanningAssumptions::default())
    }

    /// Toolkit over specific tables and planning parameters
    pub fn with_reference(reference: ReferenceData, planning: PlanningAssumptions) -> Self {
        let estate = EstateTaxCalculator::new(reference.brackets.clone(), planning);
        Self {
            reference,
            projector: FinancialProjector::new(),
            estate,
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Compound growth illustration
    pub fn grow(&self, inputs: &GrowthInputs) -> Result<GrowthProjection> {
        self.projector.project_inputs(inputs)
    }

    /// Compare preset products on a common premium plan
    pub fn compare(&self, request: &ComparisonRequest) -> Result<Comparison> {
        let products = request
            .product_ids
            .iter()
            .map(|id| {
                self.reference
                    .preset(id)
                    .ok_or_else(|| ToolkitError::invalid("product_ids", format!("unknown product `{}`", id)))
            })
            .collect::<Result<Vec<&ProductPreset>>>()?;

        let plan = PremiumPlan::new(request.annual_premium, request.pay_years)?;
        compare(&products, &plan)
    }

    /// Estate tax assessment using the deductions carried in `inputs`
    ///
    /// Requests that omit `deductions` deserialize to `DeductionSchedule::default()`;
    /// use [`Toolkit::estate_inputs`] to start from the reference schedule.
    pub fn assess_estate(&self, inputs: &EstateInputs) -> Result<EstateAssessment> {
        self.estate.assess_inputs(inputs)
    }

    /// Estate inputs prefilled with the reference deduction schedule
    pub fn estate_inputs(&self, gross_assets: f64, has_spouse: bool, num_children: i32) -> EstateInputs {
        EstateInputs {
            gross_assets,
            has_spouse,
            num_children,
            available_cash: None,
            deductions: self.reference.deductions,
        }
    }

    /// Rank medical plans by payout for a claim
    pub fn rank_medical(&self, request: &MedicalRequest) -> Result<Vec<ClaimEstimate>> {
        let plans: Vec<MedicalPlan> = match &request.plan_ids {
            None => self.reference.medical_plans.clone(),
            Some(ids) => ids
                .iter()
                .map(|id| {
                    self.reference
                        .medical_plan(id)
                        .cloned()
                        .ok_or_else(|| ToolkitError::invalid("plan_ids", format!("unknown plan `{}`", id)))
                })
                .collect::<Result<_>>()?,
        };

        rank(&plans, &request.scenario)
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new()
    }
}
