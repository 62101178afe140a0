// --- File: crates/scheduler_common/src/lib.rs ---

pub mod error;     // Error handling
pub mod http;      // HTTP utilities
pub mod logging;   // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{
    SchedulerError,
    HttpStatusCode,
    prerequisite_error,
    external_service_error,
    internal_error,
};

// Re-export HTTP utilities for easier access
pub use http::{
    IntoHttpResponse,
    client::{create_client, create_json_client},
};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_error};

// Shared error handling, logging and HTTP plumbing for the Scheduler workspace.
