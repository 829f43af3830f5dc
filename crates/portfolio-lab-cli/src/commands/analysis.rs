use serde_json::Value;
use std::time::Instant;

use portfolio_lab_core::validation::portfolio_warnings;
use portfolio_lab_core::{analyze_portfolio, with_metadata, Portfolio};

use super::{load_portfolio, PortfolioArgs};

pub fn run_analyze(args: PortfolioArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let portfolio = load_portfolio(&args)?;

    let start = Instant::now();
    let analysis = analyze_portfolio(&portfolio);
    let elapsed = start.elapsed().as_micros() as u64;

    let output = with_metadata(
        "Allocation-weighted risk and diversification scoring",
        &serde_json::json!({
            "num_assets": portfolio.assets.len(),
            "total_allocation": portfolio.total_allocation().to_string(),
            "total_value": portfolio.total_value.to_string(),
        }),
        portfolio_warnings(&portfolio),
        elapsed,
        analysis,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_sample() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(Portfolio::sample())?)
}
