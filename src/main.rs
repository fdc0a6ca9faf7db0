//! Sales Toolkit CLI
//!
//! Command-line front end for the dashboard calculations

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use sales_toolkit::estate::{EstateInputs, PlanningAssumptions};
use sales_toolkit::medical::ClaimScenario;
use sales_toolkit::projection::GrowthInputs;
use sales_toolkit::toolkit::{ComparisonRequest, MedicalRequest};
use sales_toolkit::{ReferenceData, Toolkit};

#[derive(Debug, Parser)]
#[command(name = "sales_toolkit", version, about = "Insurance sales dashboard calculations")]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Directory holding presets.csv, brackets.csv and medical_plans.csv
    #[arg(long, global = true)]
    reference_dir: Option<PathBuf>,

    /// Death benefit per unit of premium for estate planning
    #[arg(long, global = true, default_value_t = 3.0)]
    leverage: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compound growth of a lump sum plus monthly contributions
    Grow {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual rate in percent
        #[arg(long, default_value_t = 6.0)]
        rate: f64,
        #[arg(long, default_value_t = 20, allow_hyphen_values = true)]
        years: i32,
    },
    /// Compare preset products on the same premium plan
    Compare {
        #[arg(long)]
        annual_premium: f64,
        #[arg(long, default_value_t = 6)]
        pay_years: u32,
        /// Preset ids; every preset when omitted
        #[arg(long = "product")]
        products: Vec<String>,
    },
    /// Estate tax, liquidity gap and insurance sizing
    Estate {
        #[arg(long)]
        gross: f64,
        #[arg(long)]
        spouse: bool,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        children: i32,
        /// Liquid assets available for the tax
        #[arg(long)]
        cash: Option<f64>,
    },
    /// Rank medical plans by payout for a claim
    Medical {
        #[arg(long, default_value_t = 0)]
        days: u32,
        /// Room charge per day
        #[arg(long, default_value_t = 0.0)]
        room: f64,
        #[arg(long, default_value_t = 0.0)]
        surgery: f64,
        #[arg(long, default_value_t = 0.0)]
        misc: f64,
        #[arg(long)]
        outpatient: bool,
        #[arg(long = "plan")]
        plans: Vec<String>,
    },
}

fn load_reference(dir: &Path) -> anyhow::Result<ReferenceData> {
    let open = |name: &str| {
        let path = dir.join(name);
        File::open(&path).with_context(|| format!("opening {}", path.display()))
    };

    ReferenceData::from_readers(open("presets.csv")?, open("brackets.csv")?, open("medical_plans.csv")?)
        .with_context(|| format!("loading reference tables from {}", dir.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(dir) = &cli.reference_dir {
        load_reference(dir)?
            .install()
            .map_err(|_| anyhow!("reference data already initialised"))?;
    }

    let toolkit = Toolkit::with_reference(
        ReferenceData::global().clone(),
        PlanningAssumptions { insurance_leverage: cli.leverage },
    );

    match cli.command {
        Command::Grow { initial, monthly, rate, years } => {
            let projection = toolkit.grow(&GrowthInputs {
                initial_amount: initial,
                monthly_contribution: monthly,
                annual_rate_percent: rate,
                horizon_years: years,
            })?;

            if cli.json {
                return print_json(&projection);
            }

            println!("{:>4} {:>16} {:>16} {:>16}", "Year", "Principal", "Asset", "Interest");
            println!("{}", "-".repeat(55));
            for point in &projection.points {
                println!("{:>4} {:>16.0} {:>16.0} {:>16.0}",
                    point.year,
                    point.cumulative_principal,
                    point.compounded_asset,
                    point.interest_earned(),
                );
            }

            let summary = projection.summary();
            println!("\nAfter {} years: asset {:.0} on principal {:.0} ({:.2}x)",
                summary.years, summary.final_asset, summary.final_principal, summary.growth_multiple);
        }

        Command::Compare { annual_premium, pay_years, products } => {
            let product_ids = if products.is_empty() {
                toolkit.reference().presets.iter().map(|p| p.id.clone()).collect()
            } else {
                products
            };
            let comparison = toolkit.compare(&ComparisonRequest {
                product_ids,
                annual_premium,
                pay_years,
            })?;

            if cli.json {
                return print_json(&comparison);
            }

            print!("{:>4} {:>14}", "PY", "Paid");
            for product in &comparison.products {
                print!(" {:>20}", product.id);
            }
            println!();
            for row in &comparison.rows {
                print!("{:>4} {:>14.0}", row.year, row.premium_paid);
                for (cv, ratio) in row.cash_values.iter().zip(&row.return_ratios) {
                    print!(" {:>12.0} ({:>5.1}%)", cv, ratio * 100.0);
                }
                println!();
            }

            println!();
            for product in &comparison.products {
                let breakeven = product.breakeven_year
                    .map(|y| format!("year {}", y))
                    .unwrap_or_else(|| "never".to_string());
                let irr = product.final_irr
                    .map(|r| format!("{:.2}%", r * 100.0))
                    .unwrap_or_else(|| "n/a".to_string());
                println!("  {}: breakeven {}, IRR at final year {}", product.name, breakeven, irr);
            }
        }

        Command::Estate { gross, spouse, children, cash } => {
            let inputs = EstateInputs {
                available_cash: cash,
                ..toolkit.estate_inputs(gross, spouse, children)
            };
            let assessment = toolkit.assess_estate(&inputs)?;

            if cli.json {
                return print_json(&assessment);
            }

            println!("Gross assets:       {:>14.2}", assessment.gross_assets);
            println!("Exemption:          {:>14.2}", assessment.exemption);
            println!("Deductions:         {:>14.2}", assessment.deductions);
            println!("Net estate:         {:>14.2}", assessment.net_estate);
            println!("Tax rate:           {:>13.0}%", assessment.tax_rate * 100.0);
            println!("Tax owed:           {:>14.2}", assessment.tax_owed);
            println!("Liquidity gap:      {:>14.2}", assessment.liquidity_gap);
            println!("Suggested coverage: {:>14.2}", assessment.insurance_plan.suggested_coverage);
            println!("Estimated premium:  {:>14.2} (at {:.1}x leverage)",
                assessment.insurance_plan.estimated_premium, assessment.insurance_plan.leverage);
        }

        Command::Medical { days, room, surgery, misc, outpatient, plans } => {
            let request = MedicalRequest {
                plan_ids: if plans.is_empty() { None } else { Some(plans) },
                scenario: ClaimScenario {
                    hospital_days: days,
                    room_charge_per_day: room,
                    surgery_cost: surgery,
                    misc_cost: misc,
                    outpatient,
                },
            };
            let ranked = toolkit.rank_medical(&request)?;

            if cli.json {
                return print_json(&ranked);
            }

            println!("{:>6} {:>12} {:>12} {:>12} {:>12} {:>14}",
                "Plan", "Room", "Surgery", "Misc", "Total", "Out of pocket");
            println!("{}", "-".repeat(73));
            for est in &ranked {
                println!("{:>6} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>14.0}",
                    est.plan_id,
                    est.room_benefit,
                    est.surgery_benefit,
                    est.misc_benefit,
                    est.total_benefit,
                    est.out_of_pocket,
                );
            }
        }
    }

    Ok(())
}
