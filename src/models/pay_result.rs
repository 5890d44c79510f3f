//! Calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The computed pay breakdown for one submission.
///
/// Derived and immutable: a result is recomputed fresh on every calculation
/// request and fully replaced, never partially updated. Amounts are
/// unrounded; rounding to 2 decimal places happens only at presentation so
/// tax and net are never computed from a rounded gross.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::PayResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = PayResult {
///     gross_pay: Decimal::from_str("736.25").unwrap(),
///     tax_amount: Decimal::from_str("132.525").unwrap(),
///     net_pay: Decimal::from_str("603.725").unwrap(),
/// };
/// assert_eq!(result.gross_pay - result.tax_amount, result.net_pay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayResult {
    /// Total pay before tax, including overtime.
    pub gross_pay: Decimal,
    /// Tax withheld (gross pay times the tax rate).
    pub tax_amount: Decimal,
    /// Gross pay minus withheld tax.
    pub net_pay: Decimal,
}
