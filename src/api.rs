//! HTTP surface: the sanitize/evaluate endpoints the form page calls,
//! plus health, debug, and admin routes. All domain logic lives in
//! `engine` / `sanitize`; handlers only move JSON in and out.

use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, info};

use crate::engine;
use crate::outcome::Outcome;
use crate::render::{self, Rendered};
use crate::sanitize;
use crate::scheme::GradingScheme;

/// Shared state: the active grading scheme, swappable at runtime via
/// the admin reload route.
#[derive(Clone)]
pub struct AppState {
    scheme: Arc<RwLock<GradingScheme>>,
}

impl AppState {
    pub fn new(scheme: GradingScheme) -> Self {
        Self {
            scheme: Arc::new(RwLock::new(scheme)),
        }
    }

    fn current_scheme(&self) -> GradingScheme {
        *self.scheme.read().expect("scheme rwlock poisoned")
    }
}

/// Build the application router. The static form page is served from
/// `static/` as the fallback, so API routes always win.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/sanitize", post(sanitize_text))
        .route("/evaluate", post(evaluate))
        .route("/debug/scheme", get(debug_scheme))
        .route("/admin/reload-scheme", get(admin_reload_scheme))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct SanitizeReq {
    text: String,
}

#[derive(serde::Serialize)]
struct SanitizeResp {
    text: String,
}

/// Live-correction hook: the page posts the field text on every input
/// event and writes the returned text back into the field.
async fn sanitize_text(Json(body): Json<SanitizeReq>) -> Json<SanitizeResp> {
    Json(SanitizeResp {
        text: sanitize::sanitize(&body.text),
    })
}

#[derive(serde::Deserialize)]
struct EvaluateReq {
    first: String,
    second: String,
}

#[derive(serde::Serialize)]
struct EvaluateResp {
    outcome: Outcome,
    #[serde(flatten)]
    rendered: Rendered,
}

async fn evaluate(
    State(state): State<AppState>,
    Json(body): Json<EvaluateReq>,
) -> Json<EvaluateResp> {
    let scheme = state.current_scheme();
    let outcome = engine::evaluate_with_scheme(&body.first, &body.second, &scheme);
    debug!(?outcome, "evaluated");
    Json(EvaluateResp {
        rendered: render::render(&outcome),
        outcome,
    })
}

async fn debug_scheme(State(state): State<AppState>) -> Json<GradingScheme> {
    Json(state.current_scheme())
}

async fn admin_reload_scheme(State(state): State<AppState>) -> Json<GradingScheme> {
    let fresh = GradingScheme::load();
    {
        let mut guard = state.scheme.write().expect("scheme rwlock poisoned");
        *guard = fresh;
    }
    info!(scheme = ?fresh, "grading scheme reloaded");
    Json(fresh)
}
