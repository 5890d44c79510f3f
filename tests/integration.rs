//! Integration tests for the Paycheck Calculation Engine.
//!
//! This suite drives the full validate-calculate-present cycle through the
//! HTTP surface: the server-rendered form variant and the JSON endpoint.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use paycheck_engine::api::{AppState, create_router};
use paycheck_engine::calculation::PayCalculator;
use paycheck_engine::config::PayRules;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_router() -> Router {
    create_router(AppState::default())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_form(router: Router, body: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// =============================================================================
// Form variant: end-to-end scenarios
// =============================================================================

#[tokio::test]
async fn test_form_standard_week_breakdown() {
    // rate=20, hours=40: gross=800.00, tax=144.00, net=656.00
    let (status, body) = post_form(create_test_router(), "hourlyRate=20&hoursWorked=40").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="800.00""#));
    assert!(body.contains(r#"value="144.00""#));
    assert!(body.contains(r#"value="656.00""#));
}

#[tokio::test]
async fn test_form_overtime_week_breakdown() {
    // rate=15.50, hours=45: gross=736.25, tax=132.525 -> 132.53, net=603.725 -> 603.73
    let (status, body) = post_form(create_test_router(), "hourlyRate=15.50&hoursWorked=45").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="736.25""#));
    assert!(body.contains(r#"value="132.53""#));
    assert!(body.contains(r#"value="603.73""#));
}

#[tokio::test]
async fn test_form_thousands_separator_in_results() {
    // rate=100, hours=40: gross=4,000.00, tax=720.00, net=3,280.00
    let (status, body) = post_form(create_test_router(), "hourlyRate=100&hoursWorked=40").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="4,000.00""#));
    assert!(body.contains(r#"value="720.00""#));
    assert!(body.contains(r#"value="3,280.00""#));
}

#[tokio::test]
async fn test_form_zero_hours_fails_only_hours_field() {
    // rate=10, hours=0: hours fails (0 is not > 0), rate error slot stays blank,
    // all result slots cleared
    let (status, body) = post_form(create_test_router(), "hourlyRate=10&hoursWorked=0").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Enter a valid number of hours worked."));
    assert!(!body.contains("Enter a valid hourly rate."));
    assert!(!body.contains(r#"value="82.00""#));
    assert!(body.contains(r#"id="grossPay" class="form-control text-center" value="""#));
    assert!(body.contains(r#"id="taxes" class="form-control text-center" value="""#));
    assert!(body.contains(r#"id="netPay" class="form-control text-center" value="""#));
}

#[tokio::test]
async fn test_form_both_fields_invalid_sets_both_errors() {
    let (status, body) = post_form(create_test_router(), "hourlyRate=abc&hoursWorked=-5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Enter a valid hourly rate."));
    assert!(body.contains("Enter a valid number of hours worked."));
}

#[tokio::test]
async fn test_form_empty_submission_returns_200_with_errors() {
    let (status, body) = post_form(create_test_router(), "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Enter a valid hourly rate."));
    assert!(body.contains("Enter a valid number of hours worked."));
}

#[tokio::test]
async fn test_form_echoes_invalid_input_escaped() {
    let (status, body) =
        post_form(create_test_router(), "hourlyRate=%22%3E%3Cscript%3E&hoursWorked=45").await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("<script>"));
    assert!(body.contains("&quot;&gt;&lt;script&gt;"));
}

#[tokio::test]
async fn test_form_is_stateless_across_requests() {
    // A failed submission after a successful one must not leak the previous
    // results; each request re-renders from scratch.
    let router = create_test_router();

    let (_, first) = post_form(router.clone(), "hourlyRate=20&hoursWorked=40").await;
    assert!(first.contains(r#"value="800.00""#));

    let (_, second) = post_form(router, "hourlyRate=&hoursWorked=40").await;
    assert!(!second.contains(r#"value="800.00""#));
    assert!(second.contains("Enter a valid hourly rate."));
}

#[tokio::test]
async fn test_get_index_serves_empty_form() {
    let response = create_test_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("Paycheck Calculator"));
    assert!(body.contains(r#"name="hoursWorked""#));
}

// =============================================================================
// JSON variant
// =============================================================================

#[tokio::test]
async fn test_json_standard_week() {
    let (status, json) = post_calculate(
        create_test_router(),
        json!({"hourly_rate": "20", "hours_worked": "40"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(json["gross_pay"].as_str().unwrap()), decimal("800"));
    assert_eq!(decimal(json["tax_amount"].as_str().unwrap()), decimal("144"));
    assert_eq!(decimal(json["net_pay"].as_str().unwrap()), decimal("656"));
    assert_eq!(json["formatted"]["gross_pay"], "800.00");
}

#[tokio::test]
async fn test_json_overtime_week_keeps_unrounded_amounts() {
    let (status, json) = post_calculate(
        create_test_router(),
        json!({"hourly_rate": "15.50", "hours_worked": "45"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Tax and net carry sub-cent precision; only the formatted strings round
    assert_eq!(
        decimal(json["tax_amount"].as_str().unwrap()),
        decimal("132.525")
    );
    assert_eq!(
        decimal(json["net_pay"].as_str().unwrap()),
        decimal("603.725")
    );
    assert_eq!(json["formatted"]["tax_amount"], "132.53");
    assert_eq!(json["formatted"]["net_pay"], "603.73");
}

#[tokio::test]
async fn test_json_boundary_hour_uses_non_overtime_branch() {
    let (status, json) = post_calculate(
        create_test_router(),
        json!({"hourly_rate": "28.54", "hours_worked": "40"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 40 x 28.54, no overtime component
    assert_eq!(
        decimal(json["gross_pay"].as_str().unwrap()),
        decimal("1141.60")
    );
}

#[tokio::test]
async fn test_json_rejects_each_invalid_form() {
    for bad in ["", "abc", "0", "-5"] {
        let (status, json) = post_calculate(
            create_test_router(),
            json!({"hourly_rate": bad, "hours_worked": "40"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "input: {:?}", bad);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["field_errors"][0]["field"], "hourlyRate");
        assert_eq!(
            json["field_errors"][0]["message"],
            "Enter a valid hourly rate."
        );
    }
}

#[tokio::test]
async fn test_json_reports_both_invalid_fields() {
    let (status, json) = post_calculate(
        create_test_router(),
        json!({"hourly_rate": "", "hours_worked": "abc"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["field_errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_json_malformed_body_returns_400() {
    let response = create_test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

// =============================================================================
// Alternate rules
// =============================================================================

#[tokio::test]
async fn test_alternate_rules_flow_through_to_responses() {
    let rules = PayRules {
        tax_rate: decimal("0.10"),
        standard_hours: decimal("38"),
        overtime_multiplier: decimal("2.0"),
    };
    let router = create_router(AppState::new(PayCalculator::new(rules)));

    // 38 x 10 + 2 x 10 x 2.0 = 420; tax 42; net 378
    let (status, json) = post_calculate(
        router,
        json!({"hourly_rate": "10", "hours_worked": "40"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(json["gross_pay"].as_str().unwrap()), decimal("420"));
    assert_eq!(json["formatted"]["tax_amount"], "42.00");
    assert_eq!(json["formatted"]["net_pay"], "378.00");
}
