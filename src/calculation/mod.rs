//! Calculation logic for the Paycheck Calculation Engine.
//!
//! This module contains the pure function pipeline for computing pay:
//! gross pay with the overtime branch, tax withholding at the fixed rate,
//! and net pay, plus the [`PayCalculator`] that ties them to a set of
//! [`crate::config::PayRules`].

mod calculator;
mod gross_pay;
mod net_pay;
mod tax;

pub use calculator::PayCalculator;
pub use gross_pay::calculate_gross_pay;
pub use net_pay::calculate_net_pay;
pub use tax::calculate_tax_amount;
