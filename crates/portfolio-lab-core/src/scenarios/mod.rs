pub mod stress;

#[cfg(feature = "analysis")]
pub mod report;

pub use stress::{
    format_scenario_name, run_scenario, run_scenario_analysis, AssetShocks, RiskLevel, Scenario,
    ScenarioResult,
};

#[cfg(feature = "analysis")]
pub use report::{stress_test, StressReport};
