//! Configuration for the Paycheck Calculation Engine.
//!
//! The engine runs on three fixed constants: the withholding tax rate, the
//! standard-hours threshold, and the overtime multiplier. They are carried in
//! an immutable [`PayRules`] value injected into the calculator rather than
//! free-floating globals, so tests (and future deployments) can pin alternate
//! rates from a YAML file.
//!
//! # Example
//!
//! ```
//! use paycheck_engine::config::PayRules;
//!
//! let rules = PayRules::default();
//! assert_eq!(rules.tax_rate.to_string(), "0.18");
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_STANDARD_HOURS, DEFAULT_TAX_RATE, PayRules};
