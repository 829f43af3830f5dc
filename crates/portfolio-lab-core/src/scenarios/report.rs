use serde::{Deserialize, Serialize};

use super::stress::{run_scenario_analysis, ScenarioResult};
use crate::analysis::{analyze_portfolio, PortfolioAnalysis};
use crate::types::*;

/// Analysis and scenario results for one portfolio snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressReport {
    pub analysis: PortfolioAnalysis,
    pub scenarios: Vec<ScenarioResult>,
    /// Scenario with the most negative impact; the earlier one wins a tie
    pub worst_scenario: Option<ScenarioResult>,
}

/// Run both engines over the same portfolio.
pub fn stress_test(portfolio: &Portfolio) -> StressReport {
    let analysis = analyze_portfolio(portfolio);
    let scenarios = run_scenario_analysis(portfolio);
    let worst_scenario = scenarios
        .iter()
        .min_by(|a, b| a.impact.cmp(&b.impact))
        .cloned();

    StressReport {
        analysis,
        scenarios,
        worst_scenario,
    }
}
