// --- File: crates/services/scheduler_backend/src/handlers.rs ---
use askama::Template;
use axum::{response::Html, Json};
use scheduler_common::{internal_error, SchedulerError};
use serde::Serialize;
use tracing::error;

/// Title of the landing page.
pub const APP_TITLE: &str = "Scheduler - Game & Room Booking";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
}

/// Fixed health payload.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// Landing page.
pub async fn index() -> Result<Html<String>, SchedulerError> {
    let page = IndexTemplate { title: APP_TITLE }.render().map_err(|e| {
        error!("Failed to render index page: {}", e);
        internal_error(e)
    })?;
    Ok(Html(page))
}

/// Liveness check for monitoring.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        message: "Scheduler app is running",
    })
}
