//! Net pay calculation.

use rust_decimal::Decimal;

/// Calculates net pay as gross pay minus the tax withheld.
///
/// Both inputs are unrounded; with the fixed 18% rate this is always
/// 0.82 times the gross.
pub fn calculate_net_pay(gross_pay: Decimal, tax_amount: Decimal) -> Decimal {
    gross_pay - tax_amount
}
