// --- File: crates/services/scheduler_backend/src/doc.rs ---

// Only compile this module if the 'openapi' feature is enabled
#![cfg(feature = "openapi")]
// The documented functions are anchors for the macro only
#![allow(dead_code)]

use utoipa::OpenApi;

use crate::handlers::HealthStatus;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
        (status = 500, description = "Page could not be rendered", body = String)
    ),
    tag = "Scheduler"
)]
fn doc_index() {}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus,
         example = json!({"status": "healthy", "message": "Scheduler app is running"}))
    ),
    tag = "Scheduler"
)]
fn doc_health() {}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scheduler",
        version = "0.1.0",
        description = "Game & Room Booking"
    ),
    paths(doc_index, doc_health),
    components(schemas(HealthStatus)),
    tags((name = "Scheduler", description = "Web application endpoints"))
)]
pub struct SchedulerApiDoc;
