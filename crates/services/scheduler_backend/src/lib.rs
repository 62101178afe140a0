// --- File: crates/services/scheduler_backend/src/lib.rs ---

pub mod doc;
pub mod handlers;
pub mod routes;

pub use handlers::{HealthStatus, APP_TITLE};
pub use routes::routes;
