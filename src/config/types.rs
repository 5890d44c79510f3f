//! Pay rules configuration types.
//!
//! This module contains the strongly-typed rules structure that drives the
//! calculator, deserializable from a YAML rules file.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The fixed withholding tax rate (18%).
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// The standard-hours threshold above which overtime applies.
pub const DEFAULT_STANDARD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The multiplier applied to the base rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The pay rules applied by the calculator.
///
/// Immutable once constructed. [`PayRules::default`] supplies the fixed
/// production values; alternate rules can be loaded from YAML via
/// [`super::RulesLoader`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayRules {
    /// Fraction of gross pay withheld as tax.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,
    /// Hours per period paid at the base rate before overtime begins.
    #[serde(default = "default_standard_hours")]
    pub standard_hours: Decimal,
    /// Multiplier applied to the base rate for hours beyond the threshold.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_tax_rate() -> Decimal {
    DEFAULT_TAX_RATE
}

fn default_standard_hours() -> Decimal {
    DEFAULT_STANDARD_HOURS
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            standard_hours: DEFAULT_STANDARD_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}
