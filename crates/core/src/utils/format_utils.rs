//! Display formatting for dashboard values.
//!
//! The presentation layer receives already-formatted strings for the KPI
//! row: currency values are `$`-prefixed with thousands separators, growth
//! rates are `%`-suffixed, and undefined aggregates render as a placeholder
//! instead of leaking NaN or Infinity.

use rust_decimal::Decimal;

use crate::constants::{DISPLAY_DECIMAL_PRECISION, NO_DATA_PLACEHOLDER};

/// Currency-style display: `$`-prefixed, thousands-separated, two
/// decimals, the sign ahead of the `$`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(DISPLAY_DECIMAL_PRECISION);
    let formatted = group_thousands(&format!("{:.2}", rounded.abs()));
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Percent-style display with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Percent display that renders an undefined value as the no-data
/// placeholder.
pub fn format_optional_percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format_percent(value),
        None => NO_DATA_PLACEHOLDER.to_string(),
    }
}

fn group_thousands(amount: &str) -> String {
    let (integer_part, fraction_part) = amount.split_once('.').unwrap_or((amount, ""));
    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (position, digit) in integer_part.chars().enumerate() {
        if position > 0 && (integer_part.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if fraction_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(950)), "$950.00");
        assert_eq!(format_currency(dec!(1500.5)), "$1,500.50");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_places_sign_before_symbol() {
        assert_eq!(format_currency(dec!(-25500.25)), "-$25,500.25");
        // A negative that rounds to zero loses its sign
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(14.466), "14.47%");
        assert_eq!(format_percent(-41.52), "-41.52%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_optional_percent_uses_placeholder() {
        assert_eq!(format_optional_percent(Some(6.5)), "6.50%");
        assert_eq!(format_optional_percent(None), "—");
    }
}
