use serde_json::Value;
use std::time::Instant;

use portfolio_lab_core::scenarios::stress_test;
use portfolio_lab_core::validation::portfolio_warnings;
use portfolio_lab_core::{run_scenario_analysis, with_metadata, Scenario};

use super::{load_portfolio, PortfolioArgs};

fn scenario_ids() -> Vec<&'static str> {
    Scenario::ALL.iter().map(|s| s.id()).collect()
}

pub fn run_scenarios(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let portfolio = load_portfolio(&args)?;

    let start = Instant::now();
    let results = run_scenario_analysis(&portfolio);
    let elapsed = start.elapsed().as_micros() as u64;

    let output = with_metadata(
        "Fixed per-asset-class shocks weighted by allocation",
        &serde_json::json!({
            "scenarios": scenario_ids(),
            "total_value": portfolio.total_value.to_string(),
        }),
        portfolio_warnings(&portfolio),
        elapsed,
        results,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_stress_test(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let portfolio = load_portfolio(&args)?;

    let start = Instant::now();
    let report = stress_test(&portfolio);
    let elapsed = start.elapsed().as_micros() as u64;

    let output = with_metadata(
        "Portfolio analysis plus fixed macro stress scenarios",
        &serde_json::json!({
            "num_assets": portfolio.assets.len(),
            "scenarios": scenario_ids(),
            "total_value": portfolio.total_value.to_string(),
        }),
        portfolio_warnings(&portfolio),
        elapsed,
        report,
    );
    Ok(serde_json::to_value(output)?)
}
