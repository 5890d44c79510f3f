//! Validation outcome models.

use rust_decimal::Decimal;
use serde::Serialize;

use super::PayField;

/// The validation result for a single field.
///
/// Either the parsed positive value, or the field's fixed error message.
/// Exactly one of the two is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    /// The parsed value, when the raw input was usable.
    pub value: Option<Decimal>,
    /// The user-facing error message, when it was not.
    pub error: Option<&'static str>,
}

impl FieldValidation {
    /// Marks the field valid with its parsed value.
    pub fn valid(value: Decimal) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    /// Marks the field invalid with its fixed message.
    pub fn invalid(field: PayField) -> Self {
        Self {
            value: None,
            error: Some(field.error_message()),
        }
    }

    /// Whether the field passed validation.
    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

/// The per-field validation outcome of one submission.
///
/// Both fields are validated independently; a calculation proceeds only when
/// both are valid. Invalid input is a normal, expected outcome carried here,
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Outcome for the hourly rate field.
    pub hourly_rate: FieldValidation,
    /// Outcome for the hours worked field.
    pub hours_worked: FieldValidation,
}

impl ValidationOutcome {
    /// True when both fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.hourly_rate.is_valid() && self.hours_worked.is_valid()
    }

    /// The parsed `(rate, hours)` pair, present only when both fields are valid.
    pub fn values(&self) -> Option<(Decimal, Decimal)> {
        match (self.hourly_rate.value, self.hours_worked.value) {
            (Some(rate), Some(hours)) => Some((rate, hours)),
            _ => None,
        }
    }
}
