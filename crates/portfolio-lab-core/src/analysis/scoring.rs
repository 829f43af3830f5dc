use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;

use crate::types::*;

/// Number of asset classes a fully diversified portfolio spans.
const ASSET_CLASS_COUNT: Decimal = dec!(5);

/// Allocation-weighted risk on a percentage scale.
///
/// Sum of `weight * risk_coefficient(type)` times 100. Not clamped: a
/// portfolio whose allocations add up to more than 100 can score above 100.
/// Saturates at the `Decimal` bounds instead of overflowing.
pub fn risk_score(assets: &[Asset]) -> Decimal {
    let weighted = assets
        .iter()
        .map(|a| a.weight() * a.asset_type.risk_coefficient())
        .fold(Decimal::ZERO, Decimal::saturating_add);
    weighted.saturating_mul(dec!(100))
}

/// Half breadth (distinct classes out of five), half evenness
/// (one minus the allocation spread), on a percentage scale.
///
/// An empty asset list has no classes and no spread and scores exactly 50.
/// A spread wider than 100 drives the score negative.
pub fn diversification_score(assets: &[Asset]) -> Decimal {
    let type_count = assets
        .iter()
        .map(|a| a.asset_type)
        .collect::<BTreeSet<_>>()
        .len();
    let spread = allocation_spread(assets);

    let breadth = Decimal::from(type_count as i64) / ASSET_CLASS_COUNT * dec!(0.5);
    let evenness = (Decimal::ONE - spread / dec!(100)) * dec!(0.5);
    (breadth + evenness).saturating_mul(dec!(100))
}

/// Largest minus smallest allocation; zero for an empty list.
pub fn allocation_spread(assets: &[Asset]) -> Percent {
    let max = assets.iter().map(|a| a.allocation).max();
    let min = assets.iter().map(|a| a.allocation).min();
    match (max, min) {
        (Some(max), Some(min)) => max.saturating_sub(min),
        _ => Decimal::ZERO,
    }
}
