// --- File: crates/services/scheduler_backend/src/routes.rs ---
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, index};

/// The application router: `/` and `/health`.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}
