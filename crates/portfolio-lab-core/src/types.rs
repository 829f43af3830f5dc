use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PortfolioLabError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages on a 0–100 scale (40 = 40%).
pub type Percent = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// The closed set of asset classes a portfolio can hold.
///
/// Every coefficient table in the crate is an exhaustive `match` on this
/// enum, so a new variant will not compile until each table covers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stocks,
    Bonds,
    Cash,
    Commodities,
    Crypto,
}

impl AssetType {
    /// All asset types in declaration order.
    pub const ALL: [AssetType; 5] = [
        AssetType::Stocks,
        AssetType::Bonds,
        AssetType::Cash,
        AssetType::Commodities,
        AssetType::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stocks => "stocks",
            AssetType::Bonds => "bonds",
            AssetType::Cash => "cash",
            AssetType::Commodities => "commodities",
            AssetType::Crypto => "crypto",
        }
    }

    /// Weight applied to this class's allocation when computing the
    /// portfolio risk score.
    pub fn risk_coefficient(&self) -> Rate {
        match self {
            AssetType::Stocks => dec!(0.8),
            AssetType::Bonds => dec!(0.4),
            AssetType::Cash => dec!(0.1),
            AssetType::Commodities => dec!(0.6),
            AssetType::Crypto => dec!(1.0),
        }
    }

    /// Concrete instruments offered alongside a recommendation for this class.
    pub fn suggested_instruments(&self) -> [&'static str; 4] {
        match self {
            AssetType::Stocks => [
                "Nifty 50 Index Fund",
                "Sensex Index Fund",
                "Large Cap Mutual Funds",
                "Quality Dividend Stocks",
            ],
            AssetType::Bonds => [
                "Government Securities",
                "AAA Corporate Bonds",
                "Treasury Bills",
                "Public Sector Bonds",
            ],
            AssetType::Cash => [
                "High-Yield Savings Account",
                "Fixed Deposits",
                "Liquid Funds",
                "Money Market Funds",
            ],
            AssetType::Commodities => [
                "Gold ETFs",
                "Silver ETFs",
                "Multi-Commodity Funds",
                "Sovereign Gold Bonds",
            ],
            AssetType::Crypto => [
                "Bitcoin through Indian Exchanges",
                "Top 5 Cryptocurrency Index",
                "Blockchain ETFs",
                "Crypto Mutual Funds",
            ],
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = PortfolioLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| PortfolioLabError::InvalidInput {
                field: "type".into(),
                reason: format!(
                    "Unknown asset type '{s}'. Use: stocks, bonds, cash, commodities, crypto"
                ),
            })
    }
}

/// A single holding in a portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Opaque identifier, unique within a portfolio
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Share of total portfolio value, on a 0–100 scale
    pub allocation: Percent,
    /// Caller-assigned risk rating. Stored only; neither engine reads it.
    #[serde(default)]
    pub risk: Decimal,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_type: AssetType,
        allocation: Percent,
        risk: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            allocation,
            risk,
            asset_type,
        }
    }

    /// A fresh row as the input form creates it.
    pub fn blank(id: impl Into<String>) -> Self {
        Self::new(id, "", AssetType::Stocks, Decimal::ZERO, Decimal::ONE)
    }

    /// Allocation as a fraction of total value (40 -> 0.40).
    pub fn weight(&self) -> Rate {
        self.allocation / dec!(100)
    }
}

/// A snapshot of holdings plus the total value they represent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub assets: Vec<Asset>,
    #[serde(alias = "totalValue")]
    pub total_value: Money,
}

impl Portfolio {
    pub fn new(assets: Vec<Asset>, total_value: Money) -> Self {
        Self {
            assets,
            total_value,
        }
    }

    /// The starter portfolio: a 40/30/20/10 split worth 50 lakhs.
    pub fn sample() -> Self {
        Self::new(
            vec![
                Asset::new("1", "Nifty 50 ETF", AssetType::Stocks, dec!(40), dec!(3)),
                Asset::new("2", "Government Bonds", AssetType::Bonds, dec!(30), dec!(1)),
                Asset::new("3", "Bank FD", AssetType::Cash, dec!(20), dec!(0)),
                Asset::new("4", "Gold ETF", AssetType::Commodities, dec!(10), dec!(2)),
            ],
            dec!(5000000),
        )
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// Drops every asset carrying `id`.
    pub fn without_asset(mut self, id: &str) -> Self {
        self.assets.retain(|a| a.id != id);
        self
    }

    pub fn with_total_value(mut self, total_value: Money) -> Self {
        self.total_value = total_value;
        self
    }

    /// Sum of every allocation, saturating at the `Decimal` bounds.
    pub fn total_allocation(&self) -> Percent {
        self.assets
            .iter()
            .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.allocation))
    }

    /// Summed allocation of one asset class; zero when the class is absent.
    pub fn allocation_by_type(&self, asset_type: AssetType) -> Percent {
        self.assets
            .iter()
            .filter(|a| a.asset_type == asset_type)
            .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.allocation))
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
