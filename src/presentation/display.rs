//! The display-slot transform.

use crate::models::{FieldValidation, PayResult, ValidationOutcome};

use super::format_currency;

/// Non-breaking space used to clear an error slot without collapsing it.
///
/// Error slots keep their layout height when empty, so validation feedback
/// never causes visual reflow.
pub const BLANK: &str = "\u{00A0}";

/// The five display slots produced by one validate-calculate-present cycle.
///
/// A stateless pure transform, built fresh once per submission and fully
/// replacing whatever was displayed before:
///
/// - on success all three amounts are formatted independently and both error
///   slots are cleared to [`BLANK`];
/// - on validation failure for *either* field, all three result slots are
///   emptied regardless of which field failed, the failing field's error
///   text is set, and an individually valid field's error slot is [`BLANK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayDisplay {
    /// The formatted gross pay, or empty when validation failed.
    pub gross_pay: String,
    /// The formatted tax amount, or empty when validation failed.
    pub tax_amount: String,
    /// The formatted net pay, or empty when validation failed.
    pub net_pay: String,
    /// The hourly rate error slot.
    pub hourly_rate_error: String,
    /// The hours worked error slot.
    pub hours_worked_error: String,
}

impl PayDisplay {
    /// The initial page state: no results, both error slots blank.
    pub fn empty() -> Self {
        Self {
            gross_pay: String::new(),
            tax_amount: String::new(),
            net_pay: String::new(),
            hourly_rate_error: BLANK.to_string(),
            hours_worked_error: BLANK.to_string(),
        }
    }

    /// Builds the display for a successful calculation.
    pub fn from_result(result: &PayResult) -> Self {
        Self {
            gross_pay: format_currency(result.gross_pay),
            tax_amount: format_currency(result.tax_amount),
            net_pay: format_currency(result.net_pay),
            hourly_rate_error: BLANK.to_string(),
            hours_worked_error: BLANK.to_string(),
        }
    }

    /// Builds the display for a failed validation.
    ///
    /// Must only be called when `outcome.is_valid()` is false; result slots
    /// come out empty either way.
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        Self {
            gross_pay: String::new(),
            tax_amount: String::new(),
            net_pay: String::new(),
            hourly_rate_error: error_slot(&outcome.hourly_rate),
            hours_worked_error: error_slot(&outcome.hours_worked),
        }
    }

    /// True when the three result slots are populated.
    pub fn has_results(&self) -> bool {
        !self.gross_pay.is_empty()
    }
}

fn error_slot(field: &FieldValidation) -> String {
    field.error.map_or_else(|| BLANK.to_string(), str::to_string)
}
