//! Response types for the Paycheck Calculation Engine API.

use serde::{Deserialize, Serialize};

use crate::models::{PayResult, ValidationOutcome};
use crate::presentation::format_currency;

/// Successful response body for `POST /api/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The computed, unrounded pay breakdown.
    #[serde(flatten)]
    pub result: PayResult,
    /// The display strings for the three amounts.
    pub formatted: FormattedAmounts,
}

/// The three amounts as currency strings (2 decimal places, half-up).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedAmounts {
    /// Formatted gross pay.
    pub gross_pay: String,
    /// Formatted tax amount.
    pub tax_amount: String,
    /// Formatted net pay.
    pub net_pay: String,
}

impl CalculationResponse {
    /// Builds the response from a computed result.
    pub fn from_result(result: PayResult) -> Self {
        Self {
            formatted: FormattedAmounts {
                gross_pay: format_currency(result.gross_pay),
                tax_amount: format_currency(result.tax_amount),
                net_pay: format_currency(result.net_pay),
            },
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation messages, when applicable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

/// A single field's validation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// The wire name of the field.
    pub field: String,
    /// The user-facing message for the field.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    /// Creates a validation error carrying the failing fields' messages.
    pub fn validation_error(outcome: &ValidationOutcome) -> Self {
        let mut field_errors = Vec::new();
        for (name, field) in [
            ("hourlyRate", &outcome.hourly_rate),
            ("hoursWorked", &outcome.hours_worked),
        ] {
            if let Some(message) = field.error {
                field_errors.push(FieldError {
                    field: name.to_string(),
                    message: message.to_string(),
                });
            }
        }
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "One or more input fields are invalid".to_string(),
            field_errors,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
