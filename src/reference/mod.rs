//! Static reference data: preset product curves, tax tables, medical plans
//!
//! The tables are read-only. They are built once per process and shared by
//! every calculation.

mod defaults;
pub mod loader;

pub use defaults::{product_presets, PRESET_BASELINE_PREMIUM, PRESET_YEARS};
pub use loader::{load_brackets_from_reader, load_medical_plans_from_reader, load_presets_from_reader};

use std::io::Read;
use std::sync::OnceLock;

use crate::error::Result;
use crate::estate::{BracketTable, DeductionSchedule};
use crate::medical::MedicalPlan;
use crate::products::ProductPreset;

static REFERENCE: OnceLock<ReferenceData> = OnceLock::new();

/// Container for all reference tables
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub presets: Vec<ProductPreset>,
    pub brackets: BracketTable,
    pub deductions: DeductionSchedule,
    pub medical_plans: Vec<MedicalPlan>,
}

impl ReferenceData {
    /// Tables compiled into the crate
    pub fn builtin() -> Self {
        Self {
            presets: product_presets(),
            brackets: BracketTable::default_estate(),
            deductions: DeductionSchedule::default(),
            medical_plans: MedicalPlan::reference_plans(),
        }
    }

    /// Parse replacement tables from CSV; deductions keep their defaults
    pub fn from_readers<P: Read, B: Read, M: Read>(presets: P, brackets: B, medical_plans: M) -> Result<Self> {
        Ok(Self {
            presets: load_presets_from_reader(presets)?,
            brackets: load_brackets_from_reader(brackets)?,
            deductions: DeductionSchedule::default(),
            medical_plans: load_medical_plans_from_reader(medical_plans)?,
        })
    }

    /// Process-wide tables; the built-in set unless `install` ran first
    pub fn global() -> &'static ReferenceData {
        REFERENCE.get_or_init(|| {
            log::debug!("initialising built-in reference data");
            Self::builtin()
        })
    }

    /// Make these tables the process-wide set
    ///
    /// Fails (handing the tables back) once `global` or `install` has
    /// already initialised them.
    pub fn install(self) -> std::result::Result<(), ReferenceData> {
        REFERENCE.set(self)
    }

    pub fn preset(&self, id: &str) -> Option<&ProductPreset> {
        self.presets.iter().find(|p| p.id == id)
    }

    pub fn medical_plan(&self, id: &str) -> Option<&MedicalPlan> {
        self.medical_plans.iter().find(|p| p.id == id)
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
