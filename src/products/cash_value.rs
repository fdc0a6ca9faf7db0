//! Cash value curves and premium rescaling

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result};

/// Cash value by policy year (1-indexed)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashValueSeries {
    values: Vec<f64>,
}

impl CashValueSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// All-zero curve of the given length, used for manual entry products
    pub fn zeros(years: usize) -> Self {
        Self {
            values: vec![0.0; years],
        }
    }

    /// Cash value at the end of `policy_year`; 0 outside the curve
    pub fn value_at(&self, policy_year: u32) -> f64 {
        if policy_year == 0 {
            return 0.0;
        }
        self.values
            .get(policy_year as usize - 1)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of policy years covered
    pub fn years(&self) -> u32 {
        self.values.len() as u32
    }

    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0.0)
    }

    /// Rescale this curve to a different total premium
    pub fn rescaled(&self, baseline_total_premium: f64, actual_total_premium: f64) -> Result<Self> {
        Ok(Self {
            values: CashValueScaler::scale(&self.values, baseline_total_premium, actual_total_premium)?,
        })
    }
}

impl From<Vec<f64>> for CashValueSeries {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Linear rescaling of baseline cash value curves
///
/// Preset curves are calibrated to a baseline total premium; the dashboards
/// overlay them onto the premium the agent actually enters. Proportional
/// scaling is an approximation, not an actuarial recalculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CashValueScaler;

impl CashValueScaler {
    /// Ratio applied to every element; 1 when the baseline premium is 0
    pub fn ratio(baseline_total_premium: f64, actual_total_premium: f64) -> Result<f64> {
        let baseline = ensure_non_negative("baseline_total_premium", baseline_total_premium)?;
        let actual = ensure_non_negative("actual_total_premium", actual_total_premium)?;

        if baseline == 0.0 {
            Ok(1.0)
        } else {
            Ok(actual / baseline)
        }
    }

    /// `baseline[i] * actual / baseline_total` for every element
    pub fn scale(
        baseline_series: &[f64],
        baseline_total_premium: f64,
        actual_total_premium: f64,
    ) -> Result<Vec<f64>> {
        let ratio = Self::ratio(baseline_total_premium, actual_total_premium)?;
        debug!("scaling {} cash values by {:.6}", baseline_series.len(), ratio);

        Ok(baseline_series.iter().map(|v| v * ratio).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<f64> {
        vec![0.3, 1.1, 2.4, 3.8, 5.2, 6.1, 6.4]
    }

    #[test]
    fn test_identity_at_baseline() {
        assert_eq!(CashValueScaler::scale(&sample(), 6.0, 6.0).unwrap(), sample());
    }

    #[test]
    fn test_doubling() {
        let scaled = CashValueScaler::scale(&sample(), 6.0, 12.0).unwrap();
        for (s, b) in scaled.iter().zip(sample()) {
            assert_eq!(*s, b * 2.0);
        }
    }

    #[test]
    fn test_zero_baseline_is_noop() {
        assert_eq!(CashValueScaler::ratio(0.0, 50.0).unwrap(), 1.0);
        assert_eq!(CashValueScaler::scale(&sample(), 0.0, 50.0).unwrap(), sample());
    }

    #[test]
    fn test_manual_entry_fixed_point() {
        let manual = CashValueSeries::zeros(30);
        let scaled = manual.rescaled(0.0, 120.0).unwrap();
        assert!(scaled.is_all_zero());
        assert_eq!(scaled.years(), 30);
    }

    #[test]
    fn test_rejects_negative_premium() {
        assert!(CashValueScaler::scale(&sample(), 6.0, -1.0).is_err());
        assert!(CashValueScaler::scale(&sample(), -6.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_non_finite_premium() {
        assert!(CashValueScaler::scale(&sample(), f64::NAN, 6.0).unwrap_err().is_invalid_input());
        assert!(CashValueScaler::scale(&sample(), 6.0, f64::INFINITY).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_value_at() {
        let series = CashValueSeries::new(sample());
        assert_eq!(series.value_at(0), 0.0);
        assert_eq!(series.value_at(1), 0.3);
        assert_eq!(series.value_at(7), 6.4);
        assert_eq!(series.value_at(8), 0.0);
    }
}
