// --- File: crates/scheduler_tables/src/error.rs ---
use scheduler_common::{external_service_error, SchedulerError};
use thiserror::Error;

/// Errors returned by the table store client.
#[derive(Error, Debug)]
pub enum TableStoreError {
    /// The request never produced a response
    #[error("Table store request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The store rejected the request, e.g. `ResourceNotFoundException`
    #[error("Table store error {code}: {message}")]
    ServiceError { code: String, message: String },

    /// The response body could not be decoded
    #[error("Failed to decode table store response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// The configured endpoint is not a usable URL
    #[error("Invalid table store endpoint: {0}")]
    InvalidEndpoint(String),

    /// Request signing failed
    #[error("Failed to sign table store request: {0}")]
    SigningError(String),
}

impl From<TableStoreError> for SchedulerError {
    fn from(err: TableStoreError) -> Self {
        match err {
            TableStoreError::RequestError(e) => SchedulerError::HttpError(format!("Table store request error: {}", e)),
            TableStoreError::ServiceError { code, message } => {
                external_service_error("Table store", format!("{}: {}", code, message))
            }
            TableStoreError::DecodeError(e) => SchedulerError::ParseError(format!("Table store response: {}", e)),
            TableStoreError::InvalidEndpoint(msg) => SchedulerError::ConfigError(msg),
            TableStoreError::SigningError(msg) => SchedulerError::InternalError(msg),
        }
    }
}
