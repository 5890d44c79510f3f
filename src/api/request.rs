//! Request types for the Paycheck Calculation Engine API.
//!
//! Both the form and JSON variants carry the two field values as raw
//! strings: parsing is validation's job, and malformed numbers must surface
//! as per-field messages rather than deserialization failures.

use serde::{Deserialize, Serialize};

use crate::models::PayInput;

/// Form body for `POST /`, using the original form field names.
///
/// Fields default to empty strings so a submission with missing fields still
/// reaches the validator and comes back with field errors, not a 4xx.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaycheckForm {
    /// The hourly rate field, unparsed.
    #[serde(default, rename = "hourlyRate")]
    pub hourly_rate: String,
    /// The hours worked field, unparsed.
    #[serde(default, rename = "hoursWorked")]
    pub hours_worked: String,
}

/// Request body for the `POST /api/calculate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The hourly rate field, unparsed.
    #[serde(default)]
    pub hourly_rate: String,
    /// The hours worked field, unparsed.
    #[serde(default)]
    pub hours_worked: String,
}

impl From<PaycheckForm> for PayInput {
    fn from(form: PaycheckForm) -> Self {
        PayInput {
            hourly_rate: form.hourly_rate,
            hours_worked: form.hours_worked,
        }
    }
}

impl From<CalculationRequest> for PayInput {
    fn from(req: CalculationRequest) -> Self {
        PayInput {
            hourly_rate: req.hourly_rate,
            hours_worked: req.hours_worked,
        }
    }
}
