//! Side-by-side product comparison on a common premium plan

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, Result, ToolkitError};
use crate::projection::calculate_irr;
use super::cash_value::CashValueSeries;

/// Level annual premium paid at the start of each pay year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PremiumPlan {
    pub annual_premium: f64,
    pub pay_years: u32,
}

impl PremiumPlan {
    pub fn new(annual_premium: f64, pay_years: u32) -> Result<Self> {
        ensure_non_negative("annual_premium", annual_premium)?;
        Ok(Self { annual_premium, pay_years })
    }

    pub fn total_premium(&self) -> f64 {
        self.annual_premium * self.pay_years as f64
    }

    /// Premium paid by the end of `policy_year`
    pub fn paid_to_date(&self, policy_year: u32) -> f64 {
        self.annual_premium * policy_year.min(self.pay_years) as f64
    }

    fn validate(&self) -> Result<()> {
        ensure_non_negative("annual_premium", self.annual_premium).map(|_| ())
    }
}

/// A product's reference cash value curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPreset {
    pub id: String,
    pub name: String,
    /// Total premium the curve was calibrated to (0 for manual entry)
    pub baseline_total_premium: f64,
    pub pay_years: u32,
    pub series: CashValueSeries,
}

impl ProductPreset {
    /// Manual entry placeholder: an all-zero curve that scaling leaves alone
    pub fn manual_entry(years: usize) -> Self {
        Self {
            id: "manual".to_string(),
            name: "Manual entry".to_string(),
            baseline_total_premium: 0.0,
            pay_years: 0,
            series: CashValueSeries::zeros(years),
        }
    }
}

/// One product rescaled to the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLine {
    pub id: String,
    pub name: String,
    pub cash_values: CashValueSeries,
    pub breakeven_year: Option<u32>,
    /// Annual IRR of surrendering at the last year of the curve
    pub final_irr: Option<f64>,
}

/// One policy year across all compared products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub premium_paid: f64,
    pub cash_values: Vec<f64>,
    /// Cash value over premium paid to date (0 before any premium)
    pub return_ratios: Vec<f64>,
    /// Index of the product with the highest cash value
    pub leader: Option<usize>,
}

/// Complete comparison result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    pub plan: PremiumPlan,
    pub products: Vec<ProductLine>,
    pub rows: Vec<ComparisonRow>,
}

/// Rescale every product to the plan's total premium and line them up by year
pub fn compare(products: &[&ProductPreset], plan: &PremiumPlan) -> Result<Comparison> {
    plan.validate()?;
    if products.is_empty() {
        return Err(ToolkitError::invalid("products", "at least one product is required"));
    }

    let total_premium = plan.total_premium();
    let mut lines = Vec::with_capacity(products.len());

    for product in products {
        let cash_values = product
            .series
            .rescaled(product.baseline_total_premium, total_premium)?;
        let breakeven_year = breakeven_year(&cash_values, plan);
        let final_irr = irr_at_year(&cash_values, plan, cash_values.years());

        lines.push(ProductLine {
            id: product.id.clone(),
            name: product.name.clone(),
            cash_values,
            breakeven_year,
            final_irr,
        });
    }

    let years = lines.iter().map(|l| l.cash_values.years()).max().unwrap_or(0);
    let rows = (1..=years)
        .map(|year| comparison_row(&lines, plan, year))
        .collect();

    debug!(
        "compared {} products over {} years on total premium {:.2}",
        lines.len(),
        years,
        total_premium
    );

    Ok(Comparison {
        plan: *plan,
        products: lines,
        rows,
    })
}

fn comparison_row(lines: &[ProductLine], plan: &PremiumPlan, year: u32) -> ComparisonRow {
    let premium_paid = plan.paid_to_date(year);
    let cash_values: Vec<f64> = lines.iter().map(|l| l.cash_values.value_at(year)).collect();
    let return_ratios = cash_values
        .iter()
        .map(|&cv| if premium_paid > 0.0 { cv / premium_paid } else { 0.0 })
        .collect();

    let mut leader: Option<usize> = None;
    for (idx, &cv) in cash_values.iter().enumerate() {
        match leader {
            Some(best) if cash_values[best] >= cv => {}
            _ => leader = Some(idx),
        }
    }

    ComparisonRow {
        year,
        premium_paid,
        cash_values,
        return_ratios,
        leader,
    }
}

/// First policy year whose cash value covers the premium paid to date
pub fn breakeven_year(series: &CashValueSeries, plan: &PremiumPlan) -> Option<u32> {
    (1..=series.years()).find(|&year| {
        let paid = plan.paid_to_date(year);
        paid > 0.0 && series.value_at(year) >= paid
    })
}

/// Annual IRR of paying the plan and surrendering at the end of `year`
pub fn irr_at_year(series: &CashValueSeries, plan: &PremiumPlan, year: u32) -> Option<f64> {
    if year == 0 {
        return None;
    }

    let mut cashflows = vec![0.0; year as usize + 1];
    for cf in cashflows.iter_mut().take(year.min(plan.pay_years) as usize) {
        *cf -= plan.annual_premium;
    }
    cashflows[year as usize] += series.value_at(year);

    calculate_irr(&cashflows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn preset(id: &str, values: Vec<f64>) -> ProductPreset {
        ProductPreset {
            id: id.to_string(),
            name: id.to_uppercase(),
            baseline_total_premium: 6.0,
            pay_years: 6,
            series: CashValueSeries::new(values),
        }
    }

    #[test]
    fn test_paid_to_date() {
        let plan = PremiumPlan::new(10_000.0, 6).unwrap();
        assert_eq!(plan.total_premium(), 60_000.0);
        assert_eq!(plan.paid_to_date(3), 30_000.0);
        assert_eq!(plan.paid_to_date(20), 60_000.0);
    }

    #[test]
    fn test_compare_rescales_and_ranks() {
        let a = preset("a", vec![0.5, 1.5, 2.6, 3.8, 5.0, 6.2, 6.5, 6.8]);
        let b = preset("b", vec![0.8, 1.7, 2.7, 3.7, 4.9, 6.0, 6.6, 7.0]);
        // Total premium 12 = twice the baseline
        let plan = PremiumPlan::new(2.0, 6).unwrap();

        let result = compare(&[&a, &b], &plan).unwrap();
        assert_eq!(result.rows.len(), 8);
        assert_eq!(result.products[0].cash_values.value_at(1), 1.0);
        assert_eq!(result.rows[0].leader, Some(1));
        assert_eq!(result.rows[3].leader, Some(0));

        // Year 6: 12.4 on 12 paid
        assert_abs_diff_eq!(result.rows[5].return_ratios[0], 12.4 / 12.0, epsilon = 1e-12);
        // Year 5: 10.0 on 10 paid for the first, 9.8 for the second
        assert_eq!(result.products[0].breakeven_year, Some(5));
        assert_eq!(result.products[1].breakeven_year, Some(6));
    }

    #[test]
    fn test_manual_entry_never_breaks_even() {
        let manual = ProductPreset::manual_entry(10);
        let plan = PremiumPlan::new(1_000.0, 5).unwrap();
        let result = compare(&[&manual], &plan).unwrap();

        assert!(result.products[0].cash_values.is_all_zero());
        assert_eq!(result.products[0].breakeven_year, None);
        assert_eq!(result.products[0].final_irr, None);
    }

    #[test]
    fn test_irr_single_premium() {
        let series = CashValueSeries::new(vec![105.0, 110.25]);
        let plan = PremiumPlan::new(100.0, 1).unwrap();
        assert_abs_diff_eq!(irr_at_year(&series, &plan, 1).unwrap(), 0.05, epsilon = 1e-8);
        assert_abs_diff_eq!(irr_at_year(&series, &plan, 2).unwrap(), 0.05, epsilon = 1e-8);
        assert_eq!(irr_at_year(&series, &plan, 0), None);
    }

    #[test]
    fn test_compare_requires_products() {
        let plan = PremiumPlan::new(1.0, 1).unwrap();
        assert!(compare(&[], &plan).unwrap_err().is_invalid_input());
    }
}
