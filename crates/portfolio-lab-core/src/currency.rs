//! Indian-rupee helpers: lakh conversion and en-IN digit grouping.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::PortfolioLabError;
use crate::types::Money;
use crate::PortfolioLabResult;

/// One lakh = 1,00,000 rupees.
pub const LAKH: Decimal = dec!(100000);

/// Parse a user-typed lakh amount into rupees.
///
/// Every character other than digits and '.' is dropped first, so
/// "₹ 12.5 L" reads as 12.5 lakhs. Anything from a second '.' onward is
/// ignored ("1.2.3" reads as 1.2). Input with no digits, or an amount too
/// large to hold in rupees, is rejected.
pub fn lakhs_to_value(lakhs: &str) -> PortfolioLabResult<Money> {
    let invalid = |reason: String| PortfolioLabError::InvalidInput {
        field: "lakhs".into(),
        reason,
    };

    let cleaned: String = lakhs
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let number = match cleaned.match_indices('.').nth(1) {
        Some((second_dot, _)) => &cleaned[..second_dot],
        None => cleaned.as_str(),
    };
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid(format!("'{lakhs}' is not a lakh amount")));
    }

    let parsed: Decimal = number
        .parse()
        .map_err(|_| invalid(format!("'{lakhs}' is not a lakh amount")))?;
    parsed
        .checked_mul(LAKH)
        .ok_or_else(|| invalid(format!("'{lakhs}' is too large")))
}

/// Rupees to lakhs with exactly two decimal places.
pub fn value_to_lakhs(value: Money) -> String {
    let lakhs = (value / LAKH).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{lakhs:.2}")
}

/// Whole-rupee amount with the Indian grouping: `5000000` -> `₹50,00,000`.
pub fn format_inr(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
