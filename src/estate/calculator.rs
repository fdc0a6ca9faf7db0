//! Estate tax assessment and liquidity planning

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, ensure_non_negative, Result, ToolkitError};
use super::brackets::BracketTable;

/// Statutory exemption and deduction amounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeductionSchedule {
    pub exemption: f64,
    pub spouse_deduction: f64,
    pub per_child_deduction: f64,
    pub funeral_deduction: f64,
}

impl Default for DeductionSchedule {
    fn default() -> Self {
        // Ten-thousands, matching the default bracket table
        Self {
            exemption: 1_333.0,
            spouse_deduction: 553.0,
            per_child_deduction: 56.0,
            funeral_deduction: 138.0,
        }
    }
}

impl DeductionSchedule {
    fn validate(&self) -> Result<()> {
        ensure_non_negative("exemption", self.exemption)?;
        ensure_non_negative("spouse_deduction", self.spouse_deduction)?;
        ensure_non_negative("per_child_deduction", self.per_child_deduction)?;
        ensure_non_negative("funeral_deduction", self.funeral_deduction)?;
        Ok(())
    }
}

/// Illustrative planning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanningAssumptions {
    /// Death benefit per unit of premium (flat, not actuarial)
    pub insurance_leverage: f64,
}

impl Default for PlanningAssumptions {
    fn default() -> Self {
        Self { insurance_leverage: 3.0 }
    }
}

/// Inputs for one estate assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstateInputs {
    pub gross_assets: f64,
    #[serde(default)]
    pub has_spouse: bool,
    #[serde(default)]
    pub num_children: i32,
    /// Liquid assets that can settle the tax, if known
    #[serde(default)]
    pub available_cash: Option<f64>,
    #[serde(default)]
    pub deductions: DeductionSchedule,
}

/// Insurance sized to cover the liquidity gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub leverage: f64,
    pub suggested_coverage: f64,
    pub estimated_premium: f64,
}

/// Result of one assessment, recomputed on every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstateAssessment {
    pub gross_assets: f64,
    pub exemption: f64,
    /// Spouse, children and funeral deductions
    pub deductions: f64,
    pub total_deduction: f64,
    pub net_estate: f64,
    pub tax_rate: f64,
    pub tax_owed: f64,
    pub available_cash: f64,
    pub liquidity_gap: f64,
    pub insurance_plan: InsurancePlan,
}

/// Progressive estate tax calculator over an injected bracket table
#[derive(Debug, Clone, Default)]
pub struct EstateTaxCalculator {
    brackets: BracketTable,
    planning: PlanningAssumptions,
}

impl EstateTaxCalculator {
    pub fn new(brackets: BracketTable, planning: PlanningAssumptions) -> Self {
        Self { brackets, planning }
    }

    pub fn with_brackets(brackets: BracketTable) -> Self {
        Self::new(brackets, PlanningAssumptions::default())
    }

    pub fn brackets(&self) -> &BracketTable {
        &self.brackets
    }

    pub fn planning(&self) -> &PlanningAssumptions {
        &self.planning
    }

    /// Assess an estate with explicit deduction amounts and no cash figure
    #[allow(clippy::too_many_arguments)]
    pub fn assess(
        &self,
        gross_assets: f64,
        has_spouse: bool,
        num_children: i32,
        exemption: f64,
        spouse_deduction: f64,
        per_child_deduction: f64,
        funeral_deduction: f64,
    ) -> Result<EstateAssessment> {
        self.assess_inputs(&EstateInputs {
            gross_assets,
            has_spouse,
            num_children,
            available_cash: None,
            deductions: DeductionSchedule {
                exemption,
                spouse_deduction,
                per_child_deduction,
                funeral_deduction,
            },
        })
    }

    /// Assess an estate from a request struct
    pub fn assess_inputs(&self, inputs: &EstateInputs) -> Result<EstateAssessment> {
        let gross_assets = ensure_non_negative("gross_assets", inputs.gross_assets)?;
        let num_children = ensure_count("num_children", inputs.num_children)?;
        let available_cash = ensure_non_negative("available_cash", inputs.available_cash.unwrap_or(0.0))?;
        inputs.deductions.validate()?;

        let leverage = self.planning.insurance_leverage;
        if !leverage.is_finite() || leverage <= 0.0 {
            return Err(ToolkitError::invalid(
                "insurance_leverage",
                format!("must be a finite multiple > 0, got {}", leverage),
            ));
        }

        let schedule = &inputs.deductions;
        let spouse = if inputs.has_spouse { schedule.spouse_deduction } else { 0.0 };
        let deductions = spouse
            + num_children as f64 * schedule.per_child_deduction
            + schedule.funeral_deduction;
        let total_deduction = schedule.exemption + deductions;

        let net_estate = (gross_assets - total_deduction).max(0.0);
        let bracket = self.brackets.bracket_for(net_estate);
        let tax_owed = bracket.tax_on(net_estate);
        let liquidity_gap = (tax_owed - available_cash).max(0.0);

        debug!(
            "estate {:.2} less deductions {:.2}: net {:.2}, rate {}, tax {:.2}",
            gross_assets, total_deduction, net_estate, bracket.rate, tax_owed
        );

        Ok(EstateAssessment {
            gross_assets,
            exemption: schedule.exemption,
            deductions,
            total_deduction,
            net_estate,
            tax_rate: bracket.rate,
            tax_owed,
            available_cash,
            liquidity_gap,
            insurance_plan: InsurancePlan {
                leverage,
                suggested_coverage: liquidity_gap,
                estimated_premium: liquidity_gap / leverage,
            },
        })
    }
}
