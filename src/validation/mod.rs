//! Input validation for the Paycheck Calculation Engine.
//!
//! A raw field value is usable iff it is non-empty after trimming, parses as
//! a decimal number, and the parsed number is strictly greater than zero.
//! The two fields are validated independently; there is no cross-field rule.
//! Malformed input never raises an error: it is reported per field through
//! [`ValidationOutcome`].

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{FieldValidation, PayField, PayInput, ValidationOutcome};

/// Parses a raw field value into a strictly positive decimal.
///
/// Returns `None` for the three rejection classes the engine does not
/// distinguish beyond the per-field message: empty, non-numeric, and
/// zero-or-negative.
///
/// # Example
///
/// ```
/// use paycheck_engine::validation::parse_positive;
///
/// assert!(parse_positive("15.50").is_some());
/// assert!(parse_positive("").is_none());
/// assert!(parse_positive("abc").is_none());
/// assert!(parse_positive("0").is_none());
/// assert!(parse_positive("-5").is_none());
/// ```
pub fn parse_positive(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = Decimal::from_str(trimmed).ok()?;
    if value > Decimal::ZERO { Some(value) } else { None }
}

/// Validates one field of a submission.
pub fn validate_field(field: PayField, raw: &str) -> FieldValidation {
    match parse_positive(raw) {
        Some(value) => FieldValidation::valid(value),
        None => FieldValidation::invalid(field),
    }
}

/// Validates both fields of a submission.
///
/// Both fields are always checked, so a submission with two bad values
/// reports two messages at once.
pub fn validate(input: &PayInput) -> ValidationOutcome {
    ValidationOutcome {
        hourly_rate: validate_field(PayField::HourlyRate, &input.hourly_rate),
        hours_worked: validate_field(PayField::HoursWorked, &input.hours_worked),
    }
}
