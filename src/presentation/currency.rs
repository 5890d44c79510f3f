//! Currency string formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as a currency string with exactly 2 fraction digits
/// and comma thousands separators.
///
/// Rounding is pinned to half-up (`MidpointAwayFromZero`) rather than left
/// to a host locale, so "132.525" always displays as "132.53" on every
/// platform.
///
/// # Examples
///
/// ```
/// use paycheck_engine::presentation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("736.25").unwrap()), "736.25");
/// assert_eq!(format_currency(Decimal::from_str("132.525").unwrap()), "132.53");
/// assert_eq!(format_currency(Decimal::from_str("4000").unwrap()), "4,000.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{rounded:.2}");

    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("{}.{}", group_thousands(integer), fraction)
}

/// Inserts comma separators into an integer string, preserving a leading sign.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(s: &str) -> String {
        format_currency(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_always_two_fraction_digits() {
        assert_eq!(fmt("800"), "800.00");
        assert_eq!(fmt("656"), "656.00");
        assert_eq!(fmt("0.5"), "0.50");
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(fmt("132.525"), "132.53");
        assert_eq!(fmt("603.725"), "603.73");
        assert_eq!(fmt("1.005"), "1.01");
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        assert_eq!(fmt("1.004"), "1.00");
        assert_eq!(fmt("132.524"), "132.52");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(fmt("4000"), "4,000.00");
        assert_eq!(fmt("1234567.89"), "1,234,567.89");
        assert_eq!(fmt("999.99"), "999.99");
        assert_eq!(fmt("1000000"), "1,000,000.00");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        // Not reachable from validated input, but the formatter is total
        assert_eq!(fmt("-1234.5"), "-1,234.50");
    }
}
