use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::AnalysisContext;
use crate::types::*;

/// Risk score above which the portfolio is treated as high risk.
pub const HIGH_RISK_THRESHOLD: Decimal = dec!(70);

/// Minimum commodities allocation before a hedge is suggested.
pub const COMMODITIES_FLOOR: Percent = dec!(10);

/// Minimum cash allocation before a reserve top-up is suggested.
pub const CASH_FLOOR: Percent = dec!(15);

/// A suggested move toward a target allocation in one asset class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecommendation {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    /// Suggested allocation (percent of total value)
    pub allocation: Percent,
    pub reason: String,
    /// Expected annual return, in percent
    pub expected_return: Percent,
    pub risk_mitigation: String,
    pub suggested_assets: Vec<String>,
}

/// One predicate → recommendation pair.
struct RecommendationRule {
    name: &'static str,
    applies: fn(&AnalysisContext<'_>) -> bool,
    target: AssetType,
    allocation: Percent,
    expected_return: Percent,
    reason: &'static str,
    risk_mitigation: &'static str,
}

impl RecommendationRule {
    fn build(&self) -> AssetRecommendation {
        AssetRecommendation {
            asset_type: self.target,
            allocation: self.allocation,
            reason: self.reason.to_string(),
            expected_return: self.expected_return,
            risk_mitigation: self.risk_mitigation.to_string(),
            suggested_assets: self
                .target
                .suggested_instruments()
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

// Evaluated top to bottom; output keeps this order. No two rules share a target.
const RULES: [RecommendationRule; 3] = [
    RecommendationRule {
        name: "high_risk_bonds",
        applies: is_high_risk,
        target: AssetType::Bonds,
        allocation: dec!(30),
        expected_return: dec!(7.5),
        reason: "High portfolio risk detected. Consider increasing bond allocation for stability.",
        risk_mitigation: "Reduces portfolio volatility and provides steady income",
    },
    RecommendationRule {
        name: "commodities_hedge",
        applies: lacks_commodities,
        target: AssetType::Commodities,
        allocation: dec!(10),
        expected_return: dec!(8.0),
        reason: "Add gold/commodities as a hedge against market volatility",
        risk_mitigation: "Provides protection against inflation and market uncertainty",
    },
    RecommendationRule {
        name: "cash_buffer",
        applies: lacks_cash,
        target: AssetType::Cash,
        allocation: dec!(15),
        expected_return: dec!(6.0),
        reason: "Maintain adequate emergency fund and cash reserves",
        risk_mitigation: "Ensures liquidity and stability during market downturns",
    },
];

fn is_high_risk(ctx: &AnalysisContext<'_>) -> bool {
    ctx.risk_score > HIGH_RISK_THRESHOLD
}

fn lacks_commodities(ctx: &AnalysisContext<'_>) -> bool {
    ctx.portfolio.allocation_by_type(AssetType::Commodities) < COMMODITIES_FLOOR
}

fn lacks_cash(ctx: &AnalysisContext<'_>) -> bool {
    ctx.portfolio.allocation_by_type(AssetType::Cash) < CASH_FLOOR
}

/// Run every rule in order and collect the ones that fire (0 to 3 entries).
pub fn generate_recommendations(ctx: &AnalysisContext<'_>) -> Vec<AssetRecommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .inspect(|rule| trace!(rule = rule.name, target = %rule.target, "recommendation rule fired"))
        .map(RecommendationRule::build)
        .collect()
}
