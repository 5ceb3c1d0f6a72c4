use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod validation;

use crate::config::Config;
use crate::validation::ProductValidator;

/// Shared application state, cheap to clone (the validator sits behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<ProductValidator>,
}

impl AppState {
    /// Builds the immutable rule set once; every request reads it without locking.
    pub fn new() -> Self {
        Self {
            validator: Arc::new(ProductValidator::new()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔════════════════════════════════════════╗");
    info!("║  Product Service  ·  Rust + Axum       ║");
    info!("║  POST /api/v1/products  ·  GET /ping   ║");
    info!("╚════════════════════════════════════════╝");

    let state = AppState::new();

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!("Quick-start: curl http://{}/ping", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Liveness ────────────────────────────────────────────────────────
        .route("/ping", get(handlers::ping))

        // ── Products ────────────────────────────────────────────────────────
        .route("/api/v1/products", post(handlers::products::create_product))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
