//! End-to-end checks of the dashboard calculations through the public API

use approx::assert_abs_diff_eq;

use sales_toolkit::estate::{EstateInputs, PlanningAssumptions};
use sales_toolkit::medical::ClaimScenario;
use sales_toolkit::products::{compare, CashValueScaler, PremiumPlan};
use sales_toolkit::projection::GrowthInputs;
use sales_toolkit::toolkit::{ComparisonRequest, MedicalRequest};
use sales_toolkit::{FinancialProjector, ReferenceData, Toolkit};

const PRESETS_CSV: &str = "\
product_id,name,baseline_total_premium,pay_years,policy_year,cash_value
short,Short pay,3,3,1,0.9
short,Short pay,3,3,2,1.9
short,Short pay,3,3,3,3.1
long,Long pay,3,3,1,0.5
long,Long pay,3,3,2,1.6
long,Long pay,3,3,3,3.3
";

const BRACKETS_CSV: &str = "\
upper_bound,rate,subtractor
1000,0.10,0
,0.30,200
";

const MEDICAL_CSV: &str = "\
id,company,name,room_daily,surgery_limit,misc_limit,outpatient_surgery,outpatient_misc,note
LOW,Acme,Low,1000,50000,20000,true,false,
HIGH,Acme,High,2500,90000,80000,true,true,
";

#[test]
fn growth_illustration_matches_monthly_compounding() {
    let toolkit = Toolkit::new();
    let projection = toolkit
        .grow(&GrowthInputs {
            initial_amount: 100_000.0,
            monthly_contribution: 5_000.0,
            annual_rate_percent: 5.0,
            horizon_years: 10,
        })
        .unwrap();

    assert_eq!(projection.points.len(), 11);
    assert_eq!(projection.points[1].cumulative_principal, 160_000.0);
    assert_eq!(projection.points[1].compounded_asset, 166_510.0);
    assert_eq!(projection.points[10].cumulative_principal, 700_000.0);

    let summary = projection.summary();
    assert!(summary.interest_earned > 0.0);
    assert!(summary.growth_multiple > 1.0);
}

#[test]
fn batch_projection_equals_single_calls() {
    let projector = FinancialProjector::new();
    let requests: Vec<GrowthInputs> = (0..8)
        .map(|i| GrowthInputs {
            initial_amount: 1_000.0 * i as f64,
            monthly_contribution: 100.0,
            annual_rate_percent: 4.0,
            horizon_years: 15,
        })
        .collect();

    let batch = projector.project_many(&requests);
    for (inputs, result) in requests.iter().zip(batch) {
        assert_eq!(result.unwrap(), projector.project_inputs(inputs).unwrap());
    }
}

#[test]
fn scaling_identity_and_doubling() {
    let series = ReferenceData::builtin().presets[0].series.clone();
    assert_eq!(CashValueScaler::scale(series.values(), 6.0, 6.0).unwrap(), series.values());

    let doubled = CashValueScaler::scale(series.values(), 6.0, 12.0).unwrap();
    for (d, s) in doubled.iter().zip(series.values()) {
        assert_eq!(*d, s * 2.0);
    }
}

#[test]
fn custom_reference_tables_drive_every_calculator() {
    let reference = ReferenceData::from_readers(
        PRESETS_CSV.as_bytes(),
        BRACKETS_CSV.as_bytes(),
        MEDICAL_CSV.as_bytes(),
    )
    .unwrap();
    let toolkit = Toolkit::with_reference(reference, PlanningAssumptions { insurance_leverage: 2.0 });

    let comparison = toolkit
        .compare(&ComparisonRequest {
            product_ids: vec!["short".to_string(), "long".to_string()],
            annual_premium: 1_000.0,
            pay_years: 3,
        })
        .unwrap();
    assert_eq!(comparison.rows.len(), 3);
    assert_eq!(comparison.rows[0].leader, Some(0));
    assert_eq!(comparison.rows[2].leader, Some(1));
    assert_eq!(comparison.products[0].breakeven_year, Some(3));

    let assessment = toolkit
        .assess_estate(&EstateInputs {
            gross_assets: 5_000.0,
            ..toolkit.estate_inputs(0.0, false, 0)
        })
        .unwrap();
    // Default deductions: 1333 + 138
    assert_eq!(assessment.net_estate, 3_529.0);
    assert_eq!(assessment.tax_rate, 0.30);
    assert_abs_diff_eq!(assessment.tax_owed, 3_529.0 * 0.30 - 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(
        assessment.insurance_plan.estimated_premium,
        assessment.tax_owed / 2.0,
        epsilon = 1e-9
    );

    let ranked = toolkit
        .rank_medical(&MedicalRequest {
            plan_ids: None,
            scenario: ClaimScenario {
                hospital_days: 0,
                room_charge_per_day: 0.0,
                surgery_cost: 40_000.0,
                misc_cost: 30_000.0,
                outpatient: true,
            },
        })
        .unwrap();
    assert_eq!(ranked[0].plan_id, "HIGH");
    assert_eq!(ranked[0].total_benefit, 70_000.0);
    assert_eq!(ranked[1].total_benefit, 40_000.0);
}

#[test]
fn manual_entry_product_stays_zero() {
    let reference = ReferenceData::builtin();
    let manual = reference.preset("manual").unwrap();
    let plan = PremiumPlan::new(250_000.0, 6).unwrap();

    let comparison = compare(&[manual], &plan).unwrap();
    assert!(comparison.products[0].cash_values.is_all_zero());
    assert!(comparison.rows.iter().all(|r| r.return_ratios[0] == 0.0));
}

#[test]
fn invalid_inputs_fail_before_output() {
    let toolkit = Toolkit::new();

    let err = toolkit
        .grow(&GrowthInputs {
            horizon_years: -3,
            ..GrowthInputs::default()
        })
        .unwrap_err();
    assert!(err.is_invalid_input());

    let err = toolkit
        .assess_estate(&toolkit.estate_inputs(1_000.0, false, -2))
        .unwrap_err();
    assert!(err.is_invalid_input());

    let err = toolkit
        .compare(&ComparisonRequest {
            product_ids: vec!["usd_savings_6pay".to_string()],
            annual_premium: -10.0,
            pay_years: 6,
        })
        .unwrap_err();
    assert!(err.is_invalid_input());
}
