pub mod analysis;
pub mod scenarios;

use clap::Args;
use rust_decimal::Decimal;
use tracing::debug;

use portfolio_lab_core::currency::lakhs_to_value;
use portfolio_lab_core::validation::validate_portfolio;
use portfolio_lab_core::{Asset, AssetType, Portfolio};

use crate::input;

/// Where to read the portfolio from, shared by every computing command
#[derive(Args)]
pub struct PortfolioArgs {
    /// Path to a JSON file holding the portfolio
    #[arg(long)]
    pub input: Option<String>,

    /// Inline asset as name:type:allocation[:risk], repeatable
    /// (e.g. --asset "Nifty 50 ETF:stocks:40:3")
    #[arg(long = "asset")]
    pub assets: Vec<String>,

    /// Total portfolio value in rupees
    #[arg(long, conflicts_with = "total_lakhs")]
    pub total_value: Option<Decimal>,

    /// Total portfolio value in lakhs (10.00 = ₹10,00,000)
    #[arg(long)]
    pub total_lakhs: Option<String>,

    /// Reject malformed portfolios instead of computing through them
    #[arg(long)]
    pub strict: bool,
}

/// Parse `name:type:allocation[:risk]`. Risk defaults to 1.
fn parse_inline_asset(id: usize, raw: &str) -> Result<Asset, Box<dyn std::error::Error>> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(format!(
            "Asset must be name:type:allocation[:risk], got '{}'",
            raw
        )
        .into());
    }
    let asset_type: AssetType = parts[1].parse()?;
    let allocation: Decimal = parts[2]
        .trim()
        .parse()
        .map_err(|_| format!("Invalid allocation '{}' in '{}'", parts[2], raw))?;
    let risk: Decimal = match parts.get(3) {
        Some(r) => r
            .trim()
            .parse()
            .map_err(|_| format!("Invalid risk '{}' in '{}'", r, raw))?,
        None => Decimal::ONE,
    };
    Ok(Asset::new(
        id.to_string(),
        parts[0].trim(),
        asset_type,
        allocation,
        risk,
    ))
}

fn total_override(args: &PortfolioArgs) -> Result<Option<Decimal>, Box<dyn std::error::Error>> {
    if let Some(value) = args.total_value {
        return Ok(Some(value));
    }
    match args.total_lakhs {
        Some(ref lakhs) => Ok(Some(lakhs_to_value(lakhs)?)),
        None => Ok(None),
    }
}

/// Resolve the portfolio from --input, inline --asset flags, or piped stdin,
/// in that order. A --total-value/--total-lakhs flag overrides the file's total.
pub fn load_portfolio(args: &PortfolioArgs) -> Result<Portfolio, Box<dyn std::error::Error>> {
    let total = total_override(args)?;

    let portfolio = if let Some(ref path) = args.input {
        debug!(path = %path, "reading portfolio file");
        let portfolio: Portfolio = input::read_json_file(path)?;
        match total {
            Some(value) => portfolio.with_total_value(value),
            None => portfolio,
        }
    } else if !args.assets.is_empty() {
        let value = total.ok_or("Provide --total-value or --total-lakhs with --asset")?;
        let assets = args
            .assets
            .iter()
            .enumerate()
            .map(|(i, raw)| parse_inline_asset(i + 1, raw))
            .collect::<Result<Vec<_>, _>>()?;
        Portfolio::new(assets, value)
    } else if let Some(portfolio) = input::read_piped::<Portfolio>()? {
        debug!("read portfolio from stdin");
        match total {
            Some(value) => portfolio.with_total_value(value),
            None => portfolio,
        }
    } else {
        return Err("Provide --input file, --asset flags, or pipe portfolio JSON via stdin".into());
    };

    if args.strict {
        validate_portfolio(&portfolio)?;
    }
    Ok(portfolio)
}
