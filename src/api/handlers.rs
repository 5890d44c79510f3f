//! HTTP request handlers for the Paycheck Calculation Engine API.

use axum::{
    Form, Json, Router,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::PayInput;
use crate::presentation::{PayDisplay, format_currency};

use super::page::render_page;
use super::request::{CalculationRequest, PaycheckForm};
use super::response::{ApiError, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(form_handler))
        .route("/api/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for GET / — the empty form.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let page = render_page(
        &PayInput::default(),
        &PayDisplay::empty(),
        &tax_percent(&state),
    );
    Html(page)
}

/// Handler for POST / — the form-submission variant.
///
/// Runs one validate-calculate-present cycle and re-renders the page with
/// the raw submitted values echoed back. Always responds 200: invalid input
/// is a normal outcome shown in the field error slots, and an unreadable
/// body is treated as an empty submission.
async fn form_handler(
    State(state): State<AppState>,
    payload: Result<Form<PaycheckForm>, FormRejection>,
) -> Html<String> {
    let correlation_id = Uuid::new_v4();

    let input: PayInput = match payload {
        Ok(Form(form)) => form.into(),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Unreadable form body, treating as empty submission"
            );
            PayInput::default()
        }
    };

    let outcome = crate::validation::validate(&input);
    let display = if let Some((rate, hours)) = outcome.values() {
        let result = state.calculator().calculate(hours, rate);
        info!(
            correlation_id = %correlation_id,
            gross_pay = %result.gross_pay,
            "Form calculation completed"
        );
        PayDisplay::from_result(&result)
    } else {
        info!(
            correlation_id = %correlation_id,
            hourly_rate_valid = outcome.hourly_rate.is_valid(),
            hours_worked_valid = outcome.hours_worked.is_valid(),
            "Form validation failed"
        );
        PayDisplay::from_outcome(&outcome)
    };

    Html(render_page(&input, &display, &tax_percent(&state)))
}

/// Handler for POST /api/calculate — the JSON variant.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let input: PayInput = request.into();
    let outcome = crate::validation::validate(&input);

    match outcome.values() {
        Some((rate, hours)) => {
            let result = state.calculator().calculate(hours, rate);
            info!(
                correlation_id = %correlation_id,
                gross_pay = %result.gross_pay,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationResponse::from_result(result)),
            )
                .into_response()
        }
        None => {
            warn!(
                correlation_id = %correlation_id,
                hourly_rate_valid = outcome.hourly_rate.is_valid(),
                hours_worked_valid = outcome.hours_worked.is_valid(),
                "Validation failed"
            );
            (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::validation_error(&outcome)),
            )
                .into_response()
        }
    }
}

/// The tax rate as a display percentage for the read-only form field.
fn tax_percent(state: &AppState) -> String {
    format_currency(state.calculator().rules().tax_rate * Decimal::ONE_HUNDRED)
}
