use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::recommendations::HIGH_RISK_THRESHOLD;
use super::AnalysisContext;
use crate::types::*;

const LOW_RISK_THRESHOLD: Decimal = dec!(50);
const WEAK_DIVERSIFICATION: Decimal = dec!(60);
const STRONG_DIVERSIFICATION: Decimal = dec!(80);
const CONCENTRATION_LIMIT: Percent = dec!(40);
const DEFENSIVE_BONDS_MIN: Percent = dec!(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finding {
    Vulnerability,
    Strength,
}

struct HealthCheck {
    finding: Finding,
    message: &'static str,
    applies: fn(&AnalysisContext<'_>) -> bool,
}

/// Vulnerabilities and strengths of a portfolio, each in check order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthAssessment {
    pub vulnerabilities: Vec<String>,
    pub strengths: Vec<String>,
}

const CHECKS: [HealthCheck; 6] = [
    HealthCheck {
        finding: Finding::Vulnerability,
        message: "High portfolio risk exposure",
        applies: |ctx| ctx.risk_score > HIGH_RISK_THRESHOLD,
    },
    HealthCheck {
        finding: Finding::Vulnerability,
        message: "Insufficient diversification across asset classes",
        applies: |ctx| ctx.diversification_score < WEAK_DIVERSIFICATION,
    },
    HealthCheck {
        finding: Finding::Vulnerability,
        message: "Over-concentration in single asset type",
        applies: |ctx| {
            ctx.portfolio
                .assets
                .iter()
                .any(|a| a.allocation > CONCENTRATION_LIMIT)
        },
    },
    HealthCheck {
        finding: Finding::Strength,
        message: "Well-balanced risk profile",
        applies: |ctx| ctx.risk_score < LOW_RISK_THRESHOLD,
    },
    HealthCheck {
        finding: Finding::Strength,
        message: "Excellent asset diversification",
        applies: |ctx| ctx.diversification_score > STRONG_DIVERSIFICATION,
    },
    HealthCheck {
        finding: Finding::Strength,
        message: "Good defensive position with bonds",
        applies: |ctx| {
            ctx.portfolio
                .assets
                .iter()
                .any(|a| a.asset_type == AssetType::Bonds && a.allocation >= DEFENSIVE_BONDS_MIN)
        },
    },
];

/// Run the six health checks independently and sort their messages into
/// vulnerabilities and strengths.
pub fn assess_portfolio_health(ctx: &AnalysisContext<'_>) -> HealthAssessment {
    let mut assessment = HealthAssessment::default();
    for check in CHECKS.iter().filter(|c| (c.applies)(ctx)) {
        let bucket = match check.finding {
            Finding::Vulnerability => &mut assessment.vulnerabilities,
            Finding::Strength => &mut assessment.strengths,
        };
        bucket.push(check.message.to_string());
    }
    assessment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(portfolio: &Portfolio, risk: Decimal, diversification: Decimal) -> HealthAssessment {
        assess_portfolio_health(&AnalysisContext {
            portfolio,
            risk_score: risk,
            diversification_score: diversification,
        })
    }

    #[test]
    fn test_sample_portfolio_health() {
        let h = assess(&Portfolio::sample(), dec!(52), dec!(75));
        assert!(h.vulnerabilities.is_empty());
        assert_eq!(h.strengths, vec!["Good defensive position with bonds"]);
    }

    #[test]
    fn test_risky_concentrated_portfolio() {
        let p = Portfolio::new(
            vec![Asset::new("1", "BTC", AssetType::Crypto, dec!(100), dec!(5))],
            dec!(1000),
        );
        let h = assess(&p, dec!(100), dec!(60));
        assert_eq!(
            h.vulnerabilities,
            vec![
                "High portfolio risk exposure",
                "Over-concentration in single asset type",
            ]
        );
        assert!(h.strengths.is_empty());
    }

    #[test]
    fn test_boundaries() {
        let p = Portfolio::new(
            vec![
                Asset::new("1", "", AssetType::Stocks, dec!(40), Decimal::ZERO),
                Asset::new("2", "", AssetType::Bonds, dec!(20), Decimal::ZERO),
            ],
            dec!(1000),
        );
        // 70 is not high risk, 50 is not low risk, 60 and 80 fire neither diversification check,
        // 40 is not over-concentrated, bonds at exactly 20 count as defensive.
        let h = assess(&p, dec!(70), dec!(60));
        assert!(h.vulnerabilities.is_empty());
        assert_eq!(h.strengths, vec!["Good defensive position with bonds"]);

        let h = assess(&p, dec!(50), dec!(80));
        assert!(h.vulnerabilities.is_empty());
        assert_eq!(h.strengths, vec!["Good defensive position with bonds"]);
    }

    #[test]
    fn test_checks_are_not_mutually_exclusive() {
        let p = Portfolio::new(
            vec![Asset::new("1", "", AssetType::Bonds, dec!(45), Decimal::ZERO)],
            dec!(1000),
        );
        let h = assess(&p, dec!(18), dec!(55));
        assert_eq!(
            h.vulnerabilities,
            vec![
                "Insufficient diversification across asset classes",
                "Over-concentration in single asset type",
            ]
        );
        assert_eq!(
            h.strengths,
            vec!["Well-balanced risk profile", "Good defensive position with bonds"]
        );
    }
}
