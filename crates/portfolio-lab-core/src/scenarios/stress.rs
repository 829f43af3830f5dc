use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::*;

/// Fractional impact below which a scenario is rated high risk.
const HIGH_RISK_IMPACT: Rate = dec!(-0.20);

/// Fractional impact below which a scenario is rated medium risk.
const MEDIUM_RISK_IMPACT: Rate = dec!(-0.10);

/// The canned macro stress scenarios, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    MarketCrash,
    InflationSpike,
    InterestRateHike,
    GeopoliticalCrisis,
    TechSectorCrash,
}

/// Price shock per asset class, as a signed decimal (-0.40 = -40%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetShocks {
    pub stocks: Rate,
    pub bonds: Rate,
    pub cash: Rate,
    pub commodities: Rate,
    pub crypto: Rate,
}

impl AssetShocks {
    pub fn for_type(&self, asset_type: AssetType) -> Rate {
        match asset_type {
            AssetType::Stocks => self.stocks,
            AssetType::Bonds => self.bonds,
            AssetType::Cash => self.cash,
            AssetType::Commodities => self.commodities,
            AssetType::Crypto => self.crypto,
        }
    }
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::MarketCrash,
        Scenario::InflationSpike,
        Scenario::InterestRateHike,
        Scenario::GeopoliticalCrisis,
        Scenario::TechSectorCrash,
    ];

    /// Internal identifier, e.g. `interestRateHike`.
    pub fn id(&self) -> &'static str {
        match self {
            Scenario::MarketCrash => "marketCrash",
            Scenario::InflationSpike => "inflationSpike",
            Scenario::InterestRateHike => "interestRateHike",
            Scenario::GeopoliticalCrisis => "geopoliticalCrisis",
            Scenario::TechSectorCrash => "techSectorCrash",
        }
    }

    pub fn display_name(&self) -> String {
        format_scenario_name(self.id())
    }

    pub fn shocks(&self) -> AssetShocks {
        match self {
            Scenario::MarketCrash => AssetShocks {
                stocks: dec!(-0.40),
                bonds: dec!(-0.15),
                cash: dec!(0),
                commodities: dec!(-0.20),
                crypto: dec!(-0.60),
            },
            Scenario::InflationSpike => AssetShocks {
                stocks: dec!(-0.15),
                bonds: dec!(-0.20),
                cash: dec!(-0.10),
                commodities: dec!(0.20),
                crypto: dec!(-0.25),
            },
            Scenario::InterestRateHike => AssetShocks {
                stocks: dec!(-0.10),
                bonds: dec!(-0.25),
                cash: dec!(0.05),
                commodities: dec!(-0.15),
                crypto: dec!(-0.20),
            },
            Scenario::GeopoliticalCrisis => AssetShocks {
                stocks: dec!(-0.25),
                bonds: dec!(-0.10),
                cash: dec!(0),
                commodities: dec!(0.30),
                crypto: dec!(-0.35),
            },
            Scenario::TechSectorCrash => AssetShocks {
                stocks: dec!(-0.30),
                bonds: dec!(-0.05),
                cash: dec!(0),
                commodities: dec!(0.10),
                crypto: dec!(-0.45),
            },
        }
    }

    pub fn shock(&self, asset_type: AssetType) -> Rate {
        self.shocks().for_type(asset_type)
    }
}

/// Severity bucket for a scenario's portfolio impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classify a fractional impact. Each boundary belongs to the milder
    /// bucket: exactly -0.20 is medium, exactly -0.10 is low.
    pub fn from_impact(impact: Rate) -> Self {
        if impact < HIGH_RISK_IMPACT {
            RiskLevel::High
        } else if impact < MEDIUM_RISK_IMPACT {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Result for a single scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    /// Signed impact on total value, in percent
    pub impact: Percent,
    pub new_value: Money,
    /// `new_value - total_value`
    pub value_change: Money,
    pub risk_level: RiskLevel,
}

/// Turn a camelCase identifier into space-separated capitalised words
/// (`interestRateHike` -> `Interest Rate Hike`).
pub fn format_scenario_name(id: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for c in id.chars() {
        if c.is_uppercase() || words.is_empty() {
            words.push(c.to_string());
        } else if let Some(word) = words.last_mut() {
            word.push(c);
        }
    }
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Apply one scenario's shocks to a portfolio, weighting each asset by its
/// allocation. Values past the `Decimal` range saturate at its bounds.
pub fn run_scenario(portfolio: &Portfolio, scenario: Scenario) -> ScenarioResult {
    let shocks = scenario.shocks();
    let total_impact: Rate = portfolio
        .assets
        .iter()
        .map(|a| shocks.for_type(a.asset_type) * a.weight())
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let new_value = portfolio
        .total_value
        .saturating_mul(Decimal::ONE.saturating_add(total_impact));
    let risk_level = RiskLevel::from_impact(total_impact);

    debug!(
        scenario = scenario.id(),
        impact = %total_impact,
        ?risk_level,
        "scenario applied"
    );

    ScenarioResult {
        name: scenario.display_name(),
        impact: total_impact.saturating_mul(dec!(100)),
        new_value,
        value_change: new_value.saturating_sub(portfolio.total_value),
        risk_level,
    }
}

/// Run every canned scenario. Always five results, in [`Scenario::ALL`] order.
pub fn run_scenario_analysis(portfolio: &Portfolio) -> Vec<ScenarioResult> {
    Scenario::ALL
        .iter()
        .map(|s| run_scenario(portfolio, *s))
        .collect()
}
