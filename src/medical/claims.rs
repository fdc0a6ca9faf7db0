//! Claim payout estimates across medical plans

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};
use super::plans::MedicalPlan;

/// A hospital event to price against each plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClaimScenario {
    #[serde(default)]
    pub hospital_days: u32,
    #[serde(default)]
    pub room_charge_per_day: f64,
    #[serde(default)]
    pub surgery_cost: f64,
    #[serde(default)]
    pub misc_cost: f64,
    /// Surgery done without admission
    #[serde(default)]
    pub outpatient: bool,
}

impl ClaimScenario {
    pub fn total_cost(&self) -> f64 {
        let room = if self.outpatient {
            0.0
        } else {
            self.room_charge_per_day * self.hospital_days as f64
        };
        room + self.surgery_cost + self.misc_cost
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("room_charge_per_day", self.room_charge_per_day)?;
        ensure_non_negative("surgery_cost", self.surgery_cost)?;
        ensure_non_negative("misc_cost", self.misc_cost)?;
        Ok(())
    }
}

/// Payout of one plan for a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimEstimate {
    pub plan_id: String,
    pub room_benefit: f64,
    pub surgery_benefit: f64,
    pub misc_benefit: f64,
    pub total_benefit: f64,
    pub out_of_pocket: f64,
}

/// Estimate what `plan` reimburses for `scenario`
pub fn estimate(plan: &MedicalPlan, scenario: &ClaimScenario) -> Result<ClaimEstimate> {
    scenario.validate()?;
    plan.validate()?;

    let (room_benefit, surgery_benefit, misc_benefit) = if scenario.outpatient {
        let surgery = if plan.outpatient_surgery {
            scenario.surgery_cost.min(plan.surgery_limit)
        } else {
            0.0
        };
        let misc = if plan.outpatient_misc {
            scenario.misc_cost.min(plan.misc_limit)
        } else {
            0.0
        };
        (0.0, surgery, misc)
    } else {
        (
            scenario.room_charge_per_day.min(plan.room_daily) * scenario.hospital_days as f64,
            scenario.surgery_cost.min(plan.surgery_limit),
            scenario.misc_cost.min(plan.misc_limit),
        )
    };

    let total_benefit = room_benefit + surgery_benefit + misc_benefit;

    Ok(ClaimEstimate {
        plan_id: plan.id.clone(),
        room_benefit,
        surgery_benefit,
        misc_benefit,
        total_benefit,
        out_of_pocket: (scenario.total_cost() - total_benefit).max(0.0),
    })
}

/// Estimates for every plan, highest payout first
pub fn rank(plans: &[MedicalPlan], scenario: &ClaimScenario) -> Result<Vec<ClaimEstimate>> {
    let mut estimates = plans
        .iter()
        .map(|plan| estimate(plan, scenario))
        .collect::<Result<Vec<_>>>()?;

    estimates.sort_by(|a, b| b.total_benefit.total_cmp(&a.total_benefit));
    debug!("ranked {} plans for claim costing {:.0}", estimates.len(), scenario.total_cost());

    Ok(estimates)
}
