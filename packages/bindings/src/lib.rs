use napi::Result as NapiResult;
use napi_derive::napi;

use portfolio_lab_core::{currency, scenarios, Portfolio};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_portfolio(portfolio_json: &str) -> NapiResult<Portfolio> {
    serde_json::from_str(portfolio_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

#[napi]
pub fn analyze_portfolio(portfolio_json: String) -> NapiResult<String> {
    let portfolio = parse_portfolio(&portfolio_json)?;
    let output = portfolio_lab_core::analyze_portfolio(&portfolio);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn run_scenario_analysis(portfolio_json: String) -> NapiResult<String> {
    let portfolio = parse_portfolio(&portfolio_json)?;
    let output = portfolio_lab_core::run_scenario_analysis(&portfolio);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn stress_test(portfolio_json: String) -> NapiResult<String> {
    let portfolio = parse_portfolio(&portfolio_json)?;
    let output = scenarios::stress_test(&portfolio);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sample_portfolio() -> NapiResult<String> {
    serde_json::to_string(&Portfolio::sample()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

/// `value` is a decimal string so no precision is lost crossing into JS.
#[napi]
pub fn format_inr(value: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = value.trim().parse().map_err(to_napi_error)?;
    Ok(currency::format_inr(amount))
}

#[napi]
pub fn lakhs_to_value(lakhs: String) -> NapiResult<String> {
    currency::lakhs_to_value(&lakhs)
        .map(|v| v.to_string())
        .map_err(to_napi_error)
}

#[napi]
pub fn value_to_lakhs(value: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = value.trim().parse().map_err(to_napi_error)?;
    Ok(currency::value_to_lakhs(amount))
}
