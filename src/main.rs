//! Passing-grade gap calculator — binary entrypoint.
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use grade_gap::api::{self, AppState};
use grade_gap::scheme::GradingScheme;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grade_gap=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let scheme = GradingScheme::load();
    tracing::info!(?scheme, "grading scheme loaded");

    let router = api::router(AppState::new(scheme));

    let addr = std::env::var("GRADE_GAP_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router).await.context("server exited")
}
