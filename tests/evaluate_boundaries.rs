// tests/evaluate_boundaries.rs
//
// Boundary tests for the outcome classification via the public /evaluate
// route, with a cached Router (tokio::sync::OnceCell).

use axum::{
    body::{to_bytes, Body},
    http::Request,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::OnceCell;
use tower::ServiceExt; // for `oneshot`

use grade_gap::{api, AppState, GradingScheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Kind {
    MissingInput,
    InvalidFormat,
    OutOfRange,
    Impossible,
    AlreadyPassed,
    Achievable,
}

#[derive(Debug, Deserialize)]
struct OutcomeBody {
    kind: Kind,
    #[serde(default)]
    lone_sign: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct EvaluateBody {
    outcome: OutcomeBody,
    style: String,
    #[serde(default)]
    required: Option<String>,
}

// --- Router cache (build once per test binary) ---
static ROUTER: OnceCell<axum::Router> = OnceCell::const_new();

async fn test_app() -> axum::Router {
    ROUTER
        .get_or_init(|| async { api::router(AppState::new(GradingScheme::default())) })
        .await
        .clone()
}

async fn call_evaluate(first: &str, second: &str) -> EvaluateBody {
    let router = test_app().await;

    let payload = json!({ "first": first, "second": second });
    let req = Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = router.oneshot(req).await.expect("oneshot /evaluate");
    assert_eq!(resp.status(), StatusCode::OK, "({first:?}, {second:?})");

    let bytes = to_bytes(resp.into_body(), 64 * 1024).await.expect("body");
    serde_json::from_slice(&bytes).expect("parse evaluate body")
}

#[tokio::test]
async fn empty_fields_are_missing_input() {
    let b = call_evaluate("", "4").await;
    assert_eq!(b.outcome.kind, Kind::MissingInput);
    assert_eq!(b.style, "error");
}

#[tokio::test]
async fn lone_sign_is_its_own_format_error() {
    let b = call_evaluate("-", "4").await;
    assert_eq!(b.outcome.kind, Kind::InvalidFormat);
    assert_eq!(b.outcome.lone_sign, Some(true));
    assert_eq!(b.style, "error");
}

#[tokio::test]
async fn malformed_number_is_a_generic_format_error() {
    let b = call_evaluate("3.4.5", "2").await;
    assert_eq!(b.outcome.kind, Kind::InvalidFormat);
    assert_eq!(b.outcome.lone_sign, Some(false));
}

#[tokio::test]
async fn six_is_out_of_range() {
    let b = call_evaluate("6", "2").await;
    assert_eq!(b.outcome.kind, Kind::OutOfRange);
    assert_eq!(b.style, "error");
}

#[tokio::test]
async fn zero_zero_needs_more_than_the_scale_allows() {
    let b = call_evaluate("0", "0").await;
    assert_eq!(b.outcome.kind, Kind::Impossible);
    assert_eq!(b.style, "error");
    assert_eq!(b.required.as_deref(), Some("8.82"));
}

#[tokio::test]
async fn five_five_has_already_passed() {
    let b = call_evaluate("5", "5").await;
    assert_eq!(b.outcome.kind, Kind::AlreadyPassed);
    assert_eq!(b.style, "success");
    assert_eq!(b.required.as_deref(), Some("0.00"));
}

#[tokio::test]
async fn three_three_needs_one_point_oh_three() {
    let b = call_evaluate("3.0", "3.0").await;
    assert_eq!(b.outcome.kind, Kind::Achievable);
    assert_eq!(b.style, "info");
    assert_eq!(b.required.as_deref(), Some("1.03"));
}

#[tokio::test]
async fn comma_and_point_inputs_agree() {
    let comma = call_evaluate("3,5", "2,0").await;
    let point = call_evaluate("3.5", "2.0").await;
    assert_eq!(comma.outcome.kind, point.outcome.kind);
    assert_eq!(comma.required, point.required);
}
