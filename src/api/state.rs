//! Application state for the Paycheck Calculation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::PayCalculator;

/// Shared application state.
///
/// The engine is stateless across requests; the only shared resource is the
/// calculator with its immutable rules.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<PayCalculator>,
}

impl AppState {
    /// Creates a new application state with the given calculator.
    pub fn new(calculator: PayCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the calculator.
    pub fn calculator(&self) -> &PayCalculator {
        &self.calculator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PayCalculator::default())
    }
}
