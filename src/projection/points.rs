//! Output structures for growth projections

use serde::{Deserialize, Serialize};

use super::state::GrowthState;

/// Year-end snapshot, rounded to whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    pub cumulative_principal: f64,
    pub compounded_asset: f64,
}

impl ProjectionPoint {
    /// Snapshot the state; rounding happens here and only here
    pub fn from_state(state: &GrowthState) -> Self {
        Self {
            year: state.year,
            cumulative_principal: state.principal.round(),
            compounded_asset: state.asset.round(),
        }
    }

    /// Growth earned on top of the money put in
    pub fn interest_earned(&self) -> f64 {
        self.compounded_asset - self.cumulative_principal
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// One point per year, year 0 first
    pub points: Vec<ProjectionPoint>,
}

impl GrowthProjection {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            points: Vec::with_capacity(years + 1),
        }
    }

    /// Add a point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Headline figures for the final year
    pub fn summary(&self) -> GrowthSummary {
        let last = self.points.last();
        let final_principal = last.map(|p| p.cumulative_principal).unwrap_or(0.0);
        let final_asset = last.map(|p| p.compounded_asset).unwrap_or(0.0);

        GrowthSummary {
            years: last.map(|p| p.year).unwrap_or(0),
            final_principal,
            final_asset,
            interest_earned: final_asset - final_principal,
            growth_multiple: if final_principal > 0.0 {
                final_asset / final_principal
            } else {
                0.0
            },
        }
    }
}

impl Default for GrowthProjection {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    pub years: u32,
    pub final_principal: f64,
    pub final_asset: f64,
    pub interest_earned: f64,
    /// Final asset over final principal (0 when nothing was put in)
    pub growth_multiple: f64,
}
