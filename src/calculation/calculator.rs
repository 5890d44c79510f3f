//! The pay calculator.

use rust_decimal::Decimal;

use crate::config::PayRules;
use crate::models::PayResult;

use super::{calculate_gross_pay, calculate_net_pay, calculate_tax_amount};

/// Computes pay breakdowns under an immutable set of [`PayRules`].
///
/// The calculator is a pure function pipeline: gross pay (with the overtime
/// branch), then tax on the unrounded gross, then net. It assumes its caller
/// has already validated both inputs positive and does not re-validate.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::PayCalculator;
/// use paycheck_engine::config::PayRules;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = PayCalculator::new(PayRules::default());
/// let result = calculator.calculate(
///     Decimal::from_str("40").unwrap(),
///     Decimal::from_str("20").unwrap(),
/// );
/// assert_eq!(result.gross_pay, Decimal::from_str("800").unwrap());
/// assert_eq!(result.tax_amount, Decimal::from_str("144.00").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("656.00").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PayCalculator {
    rules: PayRules,
}

impl PayCalculator {
    /// Creates a calculator with the given rules.
    pub fn new(rules: PayRules) -> Self {
        Self { rules }
    }

    /// Returns the rules this calculator applies.
    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    /// Computes the pay breakdown for validated positive `hours` and `rate`.
    ///
    /// Precondition: both values are strictly positive; validation happens
    /// upstream in [`crate::validation`]. No rounding is applied here.
    pub fn calculate(&self, hours: Decimal, rate: Decimal) -> PayResult {
        debug_assert!(hours > Decimal::ZERO && rate > Decimal::ZERO);

        let gross_pay = calculate_gross_pay(hours, rate, &self.rules);
        let tax_amount = calculate_tax_amount(gross_pay, &self.rules);
        let net_pay = calculate_net_pay(gross_pay, tax_amount);

        PayResult {
            gross_pay,
            tax_amount,
            net_pay,
        }
    }
}

impl Default for PayCalculator {
    fn default() -> Self {
        Self::new(PayRules::default())
    }
}
