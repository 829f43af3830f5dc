//! Portfolio analysis: risk and diversification scoring, rule-based
//! recommendations and a strengths/vulnerabilities health check.
//!
//! Everything here is a pure function of the input portfolio. Malformed
//! portfolios (allocations not summing to 100, negative values, no assets)
//! are computed through rather than rejected; see [`crate::validation`] for
//! the opt-in checks.

pub mod health;
pub mod recommendations;
pub mod scoring;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::*;

pub use health::{assess_portfolio_health, HealthAssessment};
pub use recommendations::{generate_recommendations, AssetRecommendation};
pub use scoring::{allocation_spread, diversification_score, risk_score};

/// Output of portfolio analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    /// Allocation-weighted risk, 0–100 for well-formed portfolios
    pub risk_score: Decimal,
    /// Breadth and evenness score, 0–100 for well-formed portfolios
    pub diversification_score: Decimal,
    pub recommendations: Vec<AssetRecommendation>,
    pub vulnerabilities: Vec<String>,
    pub strengths: Vec<String>,
}

/// What the recommendation rules and health checks get to look at.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub portfolio: &'a Portfolio,
    pub risk_score: Decimal,
    pub diversification_score: Decimal,
}

/// Score a portfolio and derive recommendations and health findings.
///
/// Total: never fails. An empty portfolio scores 0 risk and 50
/// diversification.
pub fn analyze_portfolio(portfolio: &Portfolio) -> PortfolioAnalysis {
    let ctx = AnalysisContext {
        portfolio,
        risk_score: risk_score(&portfolio.assets),
        diversification_score: diversification_score(&portfolio.assets),
    };

    let recommendations = generate_recommendations(&ctx);
    let HealthAssessment {
        vulnerabilities,
        strengths,
    } = assess_portfolio_health(&ctx);

    debug!(
        assets = portfolio.assets.len(),
        risk_score = %ctx.risk_score,
        diversification_score = %ctx.diversification_score,
        recommendations = recommendations.len(),
        "portfolio analysed"
    );

    PortfolioAnalysis {
        risk_score: ctx.risk_score,
        diversification_score: ctx.diversification_score,
        recommendations,
        vulnerabilities,
        strengths,
    }
}
