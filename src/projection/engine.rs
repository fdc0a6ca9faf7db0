//! Compound-growth projection engine

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_count, ensure_non_negative, Result, ToolkitError};
use super::points::{GrowthProjection, ProjectionPoint};
use super::state::GrowthState;

/// Longest horizon accepted, in years
pub const MAX_HORIZON_YEARS: u32 = 150;

/// Inputs for one growth illustration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthInputs {
    /// Lump sum invested at year 0
    #[serde(default)]
    pub initial_amount: f64,

    /// Amount added at the end of every month
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Annual rate in percent (5.0 means 5%)
    #[serde(default = "default_annual_rate_percent")]
    pub annual_rate_percent: f64,

    /// Number of years to project
    #[serde(default = "default_horizon_years")]
    pub horizon_years: i32,
}

fn default_annual_rate_percent() -> f64 { 6.0 }
fn default_horizon_years() -> i32 { 20 }

impl Default for GrowthInputs {
    fn default() -> Self {
        Self {
            initial_amount: 0.0,
            monthly_contribution: 0.0,
            annual_rate_percent: default_annual_rate_percent(),
            horizon_years: default_horizon_years(),
        }
    }
}

/// Year-by-year compound growth projector
///
/// Stateless; a single value can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialProjector;

impl FinancialProjector {
    pub fn new() -> Self {
        Self
    }

    /// Project principal and compounded asset for `horizon_years`
    ///
    /// Returns `horizon_years + 1` points. Point 0 holds the initial amount;
    /// each later point is the balance after twelve monthly steps of
    /// `asset = asset * (1 + rate / 12) + contribution`.
    pub fn project(
        &self,
        initial_amount: f64,
        monthly_contribution: f64,
        annual_rate_percent: f64,
        horizon_years: i32,
    ) -> Result<GrowthProjection> {
        let initial_amount = ensure_non_negative("initial_amount", initial_amount)?;
        let monthly_contribution = ensure_non_negative("monthly_contribution", monthly_contribution)?;
        let horizon_years = ensure_count("horizon_years", horizon_years)?;
        if horizon_years > MAX_HORIZON_YEARS {
            return Err(ToolkitError::invalid(
                "horizon_years",
                format!("must be at most {}, got {}", MAX_HORIZON_YEARS, horizon_years),
            ));
        }
        if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
            return Err(ToolkitError::invalid(
                "annual_rate_percent",
                format!("must be a finite rate >= 0, got {}", annual_rate_percent),
            ));
        }

        let monthly_rate = annual_rate_percent / 100.0 / 12.0;
        let mut result = GrowthProjection::with_capacity(horizon_years as usize);
        let mut state = GrowthState::new(initial_amount);

        result.add_point(ProjectionPoint::from_state(&state));

        for _month in 1..=horizon_years * 12 {
            state.advance_month(monthly_rate, monthly_contribution);

            if state.at_year_end() {
                result.add_point(ProjectionPoint::from_state(&state));
            }
        }

        debug!(
            "projected {} years at {}%: principal {:.0}, asset {:.0}",
            horizon_years, annual_rate_percent, state.principal, state.asset
        );

        Ok(result)
    }

    /// Project from a request struct
    pub fn project_inputs(&self, inputs: &GrowthInputs) -> Result<GrowthProjection> {
        self.project(
            inputs.initial_amount,
            inputs.monthly_contribution,
            inputs.annual_rate_percent,
            inputs.horizon_years,
        )
    }

    /// Run independent projections in parallel, preserving input order
    pub fn project_many(&self, requests: &[GrowthInputs]) -> Vec<Result<GrowthProjection>> {
        requests
            .par_iter()
            .map(|inputs| self.project_inputs(inputs))
            .collect()
    }
}
