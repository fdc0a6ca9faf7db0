//! Medical reimbursement plan terms

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};

/// Benefit limits of one reimbursement plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalPlan {
    pub id: String,
    pub company: String,
    pub name: String,
    /// Daily room charge limit
    pub room_daily: f64,
    /// Inpatient surgery limit
    pub surgery_limit: f64,
    /// Hospital miscellaneous expense limit
    pub misc_limit: f64,
    /// Pays surgery performed as an outpatient
    pub outpatient_surgery: bool,
    /// Pays miscellaneous expenses of outpatient surgery
    pub outpatient_misc: bool,
    #[serde(default)]
    pub note: String,
}

impl MedicalPlan {
    /// Limits must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("room_daily", self.room_daily)?;
        ensure_non_negative("surgery_limit", self.surgery_limit)?;
        ensure_non_negative("misc_limit", self.misc_limit)?;
        Ok(())
    }

    /// Reference plans shown by the comparison dashboard
    pub fn reference_plans() -> Vec<MedicalPlan> {
        vec![
            MedicalPlan {
                id: "KG_A".to_string(),
                company: "凱基人壽".to_string(),
                name: "好康泰 (MA)".to_string(),
                room_daily: 3_000.0,
                surgery_limit: 200_000.0,
                misc_limit: 150_000.0,
                outpatient_surgery: true,
                outpatient_misc: true,
                note: "Blanket wording; outpatient surgery misc expenses paid up to the inpatient limit.".to_string(),
            },
            MedicalPlan {
                id: "FB_B".to_string(),
                company: "富x人壽".to_string(),
                name: "享安心 (HS)".to_string(),
                room_daily: 2_000.0,
                surgery_limit: 150_000.0,
                misc_limit: 100_000.0,
                outpatient_surgery: true,
                outpatient_misc: false,
                note: "Outpatient surgery pays the surgery fee only, no misc expenses (e.g. self-paid lenses).".to_string(),
            },
            MedicalPlan {
                id: "GL_C".to_string(),
                company: "全x人壽".to_string(),
                name: "實在醫靠 (XHB)".to_string(),
                room_daily: 4_000.0,
                surgery_limit: 180_000.0,
                misc_limit: 200_000.0,
                outpatient_surgery: true,
                outpatient_misc: true,
                note: "High limits, but surgery pays by schedule multiple; check the surgery table.".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_plans() {
        let plans = MedicalPlan::reference_plans();
        assert_eq!(plans.len(), 3);

        let fb = plans.iter().find(|p| p.id == "FB_B").unwrap();
        assert!(fb.outpatient_surgery);
        assert!(!fb.outpatient_misc);
        assert_eq!(fb.misc_limit, 100_000.0);
        assert!(plans.iter().all(|p| p.validate().is_ok()));
    }

    #[test]
    fn test_validate_rejects_bad_limits() {
        let mut plan = MedicalPlan::reference_plans().remove(0);
        plan.room_daily = -1_000.0;
        assert!(plan.validate().unwrap_err().is_invalid_input());

        plan.room_daily = 1_000.0;
        plan.surgery_limit = f64::NAN;
        assert!(plan.validate().unwrap_err().is_invalid_input());
    }
}
