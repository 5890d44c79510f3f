//! HTTP API module for the Paycheck Calculation Engine.
//!
//! This module provides the server-rendered form variant of the calculator
//! (GET and POST on `/`) plus a JSON endpoint (`POST /api/calculate`).

mod handlers;
mod page;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PaycheckForm};
pub use response::{ApiError, CalculationResponse, FieldError, FormattedAmounts};
pub use state::AppState;
