//! Gross pay calculation with the overtime branch.

use rust_decimal::Decimal;

use crate::config::PayRules;

/// Calculates gross pay for the given hours and base rate.
///
/// Hours up to the standard-hours threshold are paid at the base rate; the
/// portion beyond the threshold is paid at the base rate times the overtime
/// multiplier. The result is a continuous, piecewise-linear function of
/// hours with a kink at the threshold; the threshold hour itself takes the
/// non-overtime branch.
///
/// # Examples
///
/// ```
/// use paycheck_engine::calculation::calculate_gross_pay;
/// use paycheck_engine::config::PayRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = PayRules::default();
///
/// // 40 hours at $20: no overtime
/// let gross = calculate_gross_pay(
///     Decimal::from_str("40").unwrap(),
///     Decimal::from_str("20").unwrap(),
///     &rules,
/// );
/// assert_eq!(gross, Decimal::from_str("800").unwrap());
///
/// // 45 hours at $15.50: 5 overtime hours at 1.5x
/// let gross = calculate_gross_pay(
///     Decimal::from_str("45").unwrap(),
///     Decimal::from_str("15.50").unwrap(),
///     &rules,
/// );
/// assert_eq!(gross, Decimal::from_str("736.25").unwrap());
/// ```
pub fn calculate_gross_pay(hours: Decimal, rate: Decimal, rules: &PayRules) -> Decimal {
    if hours <= rules.standard_hours {
        hours * rate
    } else {
        let standard_pay = rules.standard_hours * rate;
        let overtime_hours = hours - rules.standard_hours;
        let overtime_pay = overtime_hours * rate * rules.overtime_multiplier;
        standard_pay + overtime_pay
    }
}
