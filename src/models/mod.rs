//! Core data models for the Paycheck Calculation Engine.

mod pay_input;
mod pay_result;
mod validation_outcome;

pub use pay_input::{PayField, PayInput};
pub use pay_result::PayResult;
pub use validation_outcome::{FieldValidation, ValidationOutcome};
