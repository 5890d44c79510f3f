//! Raw submission input models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The raw field values of one submission, exactly as the user typed them.
///
/// Constructed fresh from each submission event (button click or form POST)
/// and handed to the validator; no parsing happens before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInput {
    /// The hourly rate field, unparsed.
    pub hourly_rate: String,
    /// The hours worked field, unparsed.
    pub hours_worked: String,
}

impl PayInput {
    /// Creates an input from the two raw field values.
    pub fn new(hourly_rate: impl Into<String>, hours_worked: impl Into<String>) -> Self {
        Self {
            hourly_rate: hourly_rate.into(),
            hours_worked: hours_worked.into(),
        }
    }
}

/// Identity of a payroll input field.
///
/// Carries the field's wire name (as used by the form) and its fixed
/// user-facing error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayField {
    /// The hourly rate field.
    HourlyRate,
    /// The hours worked field.
    HoursWorked,
}

impl PayField {
    /// The field name as it appears on the wire.
    pub fn name(self) -> &'static str {
        match self {
            PayField::HourlyRate => "hourlyRate",
            PayField::HoursWorked => "hoursWorked",
        }
    }

    /// The fixed user-facing message shown when this field is invalid.
    pub fn error_message(self) -> &'static str {
        match self {
            PayField::HourlyRate => "Enter a valid hourly rate.",
            PayField::HoursWorked => "Enter a valid number of hours worked.",
        }
    }
}

impl fmt::Display for PayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
