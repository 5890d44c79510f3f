//! Paycheck Calculation Engine
//!
//! This crate computes a worker's pay breakdown (gross pay, tax withheld, net pay)
//! from an hourly rate and hours worked, applying a fixed 18% tax rate and a 1.5x
//! overtime multiplier to hours beyond the 40-hour standard week.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod validation;
