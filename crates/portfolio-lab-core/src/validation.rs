//! Opt-in input checks. The engines never call these; they compute through
//! whatever they are given.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

use crate::error::PortfolioLabError;
use crate::types::*;
use crate::PortfolioLabResult;

struct Issue {
    field: String,
    reason: String,
}

fn find_issues(portfolio: &Portfolio) -> Vec<Issue> {
    let mut issues = Vec::new();

    if portfolio.assets.is_empty() {
        issues.push(Issue {
            field: "assets".into(),
            reason: "Portfolio has no assets".into(),
        });
    }

    if portfolio.total_value < Decimal::ZERO {
        issues.push(Issue {
            field: "total_value".into(),
            reason: format!("Total value is negative ({})", portfolio.total_value),
        });
    }

    let mut seen = HashSet::new();
    for asset in &portfolio.assets {
        if asset.allocation < Decimal::ZERO {
            issues.push(Issue {
                field: format!("asset:{} allocation", asset.id),
                reason: format!("Allocation is negative ({})", asset.allocation),
            });
        }
        if !seen.insert(asset.id.as_str()) {
            issues.push(Issue {
                field: format!("asset:{} id", asset.id),
                reason: "Asset id is not unique".into(),
            });
        }
    }

    let total = portfolio.total_allocation();
    if !portfolio.assets.is_empty() && total != dec!(100) {
        issues.push(Issue {
            field: "allocation".into(),
            reason: format!("Allocations sum to {total}%, not 100%"),
        });
    }

    issues
}

/// Non-fatal notes about a portfolio the engines will still compute through.
pub fn portfolio_warnings(portfolio: &Portfolio) -> Vec<String> {
    find_issues(portfolio)
        .into_iter()
        .map(|i| format!("{}: {}", i.field, i.reason))
        .collect()
}

/// Strict check: fail on the first malformed aspect of the portfolio.
pub fn validate_portfolio(portfolio: &Portfolio) -> PortfolioLabResult<()> {
    match find_issues(portfolio).into_iter().next() {
        Some(issue) => Err(PortfolioLabError::InvalidInput {
            field: issue.field,
            reason: issue.reason,
        }),
        None => Ok(()),
    }
}
