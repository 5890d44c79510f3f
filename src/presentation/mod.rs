//! Display formatting for the Paycheck Calculation Engine.
//!
//! This module owns the currency-formatting contract (2 fraction digits,
//! thousands separators, rounding pinned to half-up) and the display-slot
//! transform that turns a validation outcome or a pay result into the five
//! strings a rendering layer shows.

mod currency;
mod display;

pub use currency::format_currency;
pub use display::{BLANK, PayDisplay};
