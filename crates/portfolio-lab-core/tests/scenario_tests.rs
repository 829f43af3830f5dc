use portfolio_lab_core::scenarios::{run_scenario, stress_test};
use portfolio_lab_core::{
    run_scenario_analysis, Asset, AssetType, Portfolio, RiskLevel, Scenario,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn only(asset_type: AssetType, total: Decimal) -> Portfolio {
    Portfolio::new(
        vec![Asset::new("1", "only", asset_type, dec!(100), dec!(1))],
        total,
    )
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn test_five_results_in_fixed_order() {
    let names: Vec<String> = run_scenario_analysis(&Portfolio::sample())
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Market Crash",
            "Inflation Spike",
            "Interest Rate Hike",
            "Geopolitical Crisis",
            "Tech Sector Crash",
        ]
    );
}

// ---------------------------------------------------------------------------
// Worked examples
// ---------------------------------------------------------------------------

#[test]
fn test_all_stocks_market_crash() {
    let results = run_scenario_analysis(&only(AssetType::Stocks, dec!(1000000)));
    let crash = &results[0];
    assert_eq!(crash.impact, dec!(-40.0));
    assert_eq!(crash.new_value, dec!(600000));
    assert_eq!(crash.risk_level, RiskLevel::High);
}

#[test]
fn test_all_crypto_every_scenario() {
    let results = run_scenario_analysis(&only(AssetType::Crypto, dec!(1000)));
    let impacts: Vec<Decimal> = results.iter().map(|r| r.impact).collect();
    assert_eq!(impacts, vec![dec!(-60), dec!(-25), dec!(-20), dec!(-35), dec!(-45)]);
    let levels: Vec<RiskLevel> = results.iter().map(|r| r.risk_level).collect();
    assert_eq!(
        levels,
        vec![
            RiskLevel::High,
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::High,
        ]
    );
}

#[test]
fn test_cash_gains_on_rate_hike() {
    let r = run_scenario(&only(AssetType::Cash, dec!(200000)), Scenario::InterestRateHike);
    assert_eq!(r.impact, dec!(5));
    assert_eq!(r.new_value, dec!(210000));
    assert_eq!(r.value_change, dec!(10000));
    assert_eq!(r.risk_level, RiskLevel::Low);
}

#[test]
fn test_boundary_impacts() {
    // -0.20 exactly is medium, -0.10 exactly is low.
    let bonds = run_scenario(&only(AssetType::Bonds, dec!(100)), Scenario::InflationSpike);
    assert_eq!(bonds.risk_level, RiskLevel::Medium);
    let cash = run_scenario(&only(AssetType::Cash, dec!(100)), Scenario::InflationSpike);
    assert_eq!(cash.risk_level, RiskLevel::Low);
}

#[test]
fn test_partial_allocation_scales_impact() {
    // Only half the value is allocated; the rest is untouched.
    let p = Portfolio::new(
        vec![Asset::new("1", "", AssetType::Stocks, dec!(50), dec!(1))],
        dec!(1000),
    );
    let crash = run_scenario(&p, Scenario::MarketCrash);
    assert_eq!(crash.impact, dec!(-20));
    assert_eq!(crash.new_value, dec!(800));
    assert_eq!(crash.risk_level, RiskLevel::Medium);
}

#[test]
fn test_huge_total_value_saturates_instead_of_panicking() {
    let p = only(AssetType::Commodities, Decimal::MAX / dec!(1.1));
    let report = stress_test(&p);
    assert_eq!(report.scenarios.len(), 5);
    assert_eq!(report.scenarios[3].new_value, Decimal::MAX);
    assert_eq!(report.worst_scenario.unwrap().name, "Market Crash");
}

#[test]
fn test_scenarios_are_deterministic() {
    let p = Portfolio::sample();
    assert_eq!(run_scenario_analysis(&p), run_scenario_analysis(&p));
}

#[test]
fn test_result_json_shape() {
    let json = serde_json::to_value(&run_scenario_analysis(&Portfolio::sample())[0]).unwrap();
    assert_eq!(json["name"], "Market Crash");
    assert_eq!(json["risk_level"], "high");
    assert!(json.get("new_value").is_some());
}

// ---------------------------------------------------------------------------
// Stress report
// ---------------------------------------------------------------------------

#[test]
fn test_stress_report_combines_engines() {
    let p = only(AssetType::Crypto, dec!(1000));
    let report = stress_test(&p);
    assert_eq!(report.scenarios, run_scenario_analysis(&p));
    assert_eq!(report.analysis.risk_score, dec!(100));
    let worst = report.worst_scenario.unwrap();
    assert_eq!(worst.name, "Market Crash");
    assert_eq!(worst.new_value, dec!(400));
}
