//! Property tests for both engines over randomly generated portfolios.

use portfolio_lab_core::{
    analyze_portfolio, run_scenario_analysis, Asset, AssetType, Portfolio, RiskLevel,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

fn arb_asset_type() -> impl Strategy<Value = AssetType> {
    prop_oneof![
        Just(AssetType::Stocks),
        Just(AssetType::Bonds),
        Just(AssetType::Cash),
        Just(AssetType::Commodities),
        Just(AssetType::Crypto),
    ]
}

/// Allocation in hundredths of a percent, -50.00..=150.00 so malformed inputs show up.
fn arb_allocation() -> impl Strategy<Value = Decimal> {
    (-5_000i64..=15_000).prop_map(|n| Decimal::new(n, 2))
}

fn arb_portfolio() -> impl Strategy<Value = Portfolio> {
    (
        proptest::collection::vec((arb_asset_type(), arb_allocation()), 0..12),
        0i64..100_000_000,
    )
        .prop_map(|(holdings, total)| {
            let assets = holdings
                .into_iter()
                .enumerate()
                .map(|(i, (t, alloc))| Asset::new(i.to_string(), format!("asset {i}"), t, alloc, dec!(1)))
                .collect();
            Portfolio::new(assets, Decimal::from(total))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_analysis_is_deterministic(p in arb_portfolio()) {
        prop_assert_eq!(analyze_portfolio(&p), analyze_portfolio(&p));
    }

    #[test]
    fn prop_scenarios_are_deterministic(p in arb_portfolio()) {
        prop_assert_eq!(run_scenario_analysis(&p), run_scenario_analysis(&p));
    }

    #[test]
    fn prop_always_five_scenarios(p in arb_portfolio()) {
        let names: Vec<String> = run_scenario_analysis(&p).into_iter().map(|r| r.name).collect();
        prop_assert_eq!(
            names,
            vec![
                "Market Crash".to_string(),
                "Inflation Spike".to_string(),
                "Interest Rate Hike".to_string(),
                "Geopolitical Crisis".to_string(),
                "Tech Sector Crash".to_string(),
            ]
        );
    }

    #[test]
    fn prop_recommendations_unique_and_bounded(p in arb_portfolio()) {
        let recs = analyze_portfolio(&p).recommendations;
        prop_assert!(recs.len() <= 3);
        let types: BTreeSet<AssetType> = recs.iter().map(|r| r.asset_type).collect();
        prop_assert_eq!(types.len(), recs.len());
    }

    #[test]
    fn prop_risk_level_matches_impact(p in arb_portfolio()) {
        for r in run_scenario_analysis(&p) {
            let expected = if r.impact < dec!(-20) {
                RiskLevel::High
            } else if r.impact < dec!(-10) {
                RiskLevel::Medium
            } else {
                RiskLevel::Low
            };
            prop_assert_eq!(r.risk_level, expected);
            prop_assert_eq!(r.value_change, r.new_value - p.total_value);
        }
    }

    #[test]
    fn prop_well_formed_scores_in_range(
        weights in proptest::collection::vec((arb_asset_type(), 1u32..100), 1..8)
    ) {
        // Rescale positive weights so allocations fall inside 0..=100.
        let sum: u32 = weights.iter().map(|(_, w)| w).sum();
        let assets = weights
            .iter()
            .enumerate()
            .map(|(i, (t, w))| {
                let alloc = Decimal::from(*w) * dec!(100) / Decimal::from(sum);
                Asset::new(i.to_string(), "", *t, alloc, dec!(1))
            })
            .collect();
        let a = analyze_portfolio(&Portfolio::new(assets, dec!(1000)));
        prop_assert!(a.risk_score >= Decimal::ZERO && a.risk_score <= dec!(100.0001));
        prop_assert!(a.diversification_score >= Decimal::ZERO && a.diversification_score <= dec!(100));
    }
}
