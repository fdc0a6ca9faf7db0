//! CSV parsing for replacement reference tables
//!
//! Callers hand in any reader (file, embedded string, request body); nothing
//! here touches the filesystem.

use std::io::Read;

use csv::Reader;
use serde::Deserialize;

use crate::error::{Result, ToolkitError};
use crate::estate::{BracketTable, TaxBracket};
use crate::medical::MedicalPlan;
use crate::products::{CashValueSeries, ProductPreset};

/// Longest policy year accepted in a preset table
pub const MAX_POLICY_YEAR: usize = 110;

/// One `(product, policy year)` row of a preset table
#[derive(Debug, Deserialize)]
struct PresetRow {
    product_id: String,
    name: String,
    baseline_total_premium: f64,
    pay_years: u32,
    policy_year: usize,
    cash_value: f64,
}

/// Load product presets, one row per product and policy year
///
/// Products keep the order of their first row. Years missing from the table
/// are zero.
pub fn load_presets_from_reader<R: Read>(reader: R) -> Result<Vec<ProductPreset>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut presets: Vec<(ProductPreset, Vec<f64>)> = Vec::new();

    for result in csv_reader.deserialize() {
        let row: PresetRow = result?;

        if row.policy_year == 0 || row.policy_year > MAX_POLICY_YEAR {
            return Err(ToolkitError::invalid(
                "policy_year",
                format!("{} has year {} outside 1..={}", row.product_id, row.policy_year, MAX_POLICY_YEAR),
            ));
        }

        let idx = match presets.iter().position(|(p, _)| p.id == row.product_id) {
            Some(idx) => idx,
            None => {
                presets.push((
                    ProductPreset {
                        id: row.product_id.clone(),
                        name: row.name.clone(),
                        baseline_total_premium: row.baseline_total_premium,
                        pay_years: row.pay_years,
                        series: CashValueSeries::default(),
                    },
                    Vec::new(),
                ));
                presets.len() - 1
            }
        };

        let values = &mut presets[idx].1;
        if values.len() < row.policy_year {
            values.resize(row.policy_year, 0.0);
        }
        values[row.policy_year - 1] = row.cash_value;
    }

    Ok(presets
        .into_iter()
        .map(|(mut preset, values)| {
            preset.series = CashValueSeries::new(values);
            preset
        })
        .collect())
}

/// Load a bracket table; an empty `upper_bound` marks the top bracket
pub fn load_brackets_from_reader<R: Read>(reader: R) -> Result<BracketTable> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut brackets = Vec::new();

    for result in csv_reader.deserialize() {
        let bracket: TaxBracket = result?;
        brackets.push(bracket);
    }

    BracketTable::new(brackets)
}

/// Load medical plan terms, one plan per row
pub fn load_medical_plans_from_reader<R: Read>(reader: R) -> Result<Vec<MedicalPlan>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let plan: MedicalPlan = result?;
        plan.validate()?;
        plans.push(plan);
    }

    Ok(plans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_presets() {
        let data = "\
product_id,name,baseline_total_premium,pay_years,policy_year,cash_value
alpha,Alpha,6,6,1,0.5
alpha,Alpha,6,6,2,1.5
beta,Beta,12,3,1,2.0
alpha,Alpha,6,6,4,3.9
";
        let presets = load_presets_from_reader(data.as_bytes()).unwrap();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[0].id, "alpha");
        assert_eq!(presets[0].series.values(), &[0.5, 1.5, 0.0, 3.9]);
        assert_eq!(presets[1].baseline_total_premium, 12.0);
        assert_eq!(presets[1].pay_years, 3);
    }

    #[test]
    fn test_load_presets_rejects_year_zero() {
        let data = "\
product_id,name,baseline_total_premium,pay_years,policy_year,cash_value
alpha,Alpha,6,6,0,0.5
";
        assert!(load_presets_from_reader(data.as_bytes()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_load_brackets() {
        let data = "\
upper_bound,rate,subtractor
0,0,0
5000,0.10,0
10000,0.15,250
,0.20,750
";
        let table = load_brackets_from_reader(data.as_bytes()).unwrap();
        assert_eq!(table, BracketTable::default_estate());
    }

    #[test]
    fn test_load_brackets_validates_order() {
        let data = "\
upper_bound,rate,subtractor
5000,0.10,0
100,0.15,0
,0.20,0
";
        assert!(load_brackets_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_load_medical_plans() {
        let data = "\
id,company,name,room_daily,surgery_limit,misc_limit,outpatient_surgery,outpatient_misc,note
P1,Acme Life,Basic,1500,80000,60000,true,false,
";
        let plans = load_medical_plans_from_reader(data.as_bytes()).unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].room_daily, 1_500.0);
        assert!(!plans[0].outpatient_misc);
        assert_eq!(plans[0].note, "");
    }

    #[test]
    fn test_load_medical_plans_rejects_bad_limits() {
        let negative = "\
id,company,name,room_daily,surgery_limit,misc_limit,outpatient_surgery,outpatient_misc,note
P1,Acme Life,Basic,-1000,80000,60000,true,false,
";
        let err = load_medical_plans_from_reader(negative.as_bytes()).unwrap_err();
        assert!(err.is_invalid_input());

        let nan = "\
id,company,name,room_daily,surgery_limit,misc_limit,outpatient_surgery,outpatient_misc,note
P1,Acme Life,Basic,1000,NaN,60000,true,false,
";
        let err = load_medical_plans_from_reader(nan.as_bytes()).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let data = "upper_bound,rate,subtractor\nabc,0.1,0\n";
        let err = load_brackets_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ToolkitError::Csv(_)));
    }
}
