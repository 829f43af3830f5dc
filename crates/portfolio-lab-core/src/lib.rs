pub mod currency;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(feature = "analysis")]
pub mod analysis;

#[cfg(feature = "scenarios")]
pub mod scenarios;

pub use error::PortfolioLabError;
pub use types::*;

#[cfg(feature = "analysis")]
pub use analysis::{analyze_portfolio, AssetRecommendation, PortfolioAnalysis};

#[cfg(feature = "scenarios")]
pub use scenarios::{run_scenario_analysis, RiskLevel, Scenario, ScenarioResult};

/// Standard result type for all fallible portfolio-lab operations
pub type PortfolioLabResult<T> = Result<T, PortfolioLabError>;
