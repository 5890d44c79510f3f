//! Tax withholding calculation.

use rust_decimal::Decimal;

use crate::config::PayRules;

/// Calculates the tax withheld on a gross pay amount.
///
/// A single fixed rate applied to the whole amount; no brackets. The input
/// must be the *unrounded* gross pay so rounding error never compounds into
/// the tax and net figures.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::calculate_tax_amount;
/// use paycheck_engine::config::PayRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_tax_amount(Decimal::from_str("800").unwrap(), &PayRules::default());
/// assert_eq!(tax, Decimal::from_str("144.00").unwrap());
/// ```
pub fn calculate_tax_amount(gross_pay: Decimal, rules: &PayRules) -> Decimal {
    gross_pay * rules.tax_rate
}
