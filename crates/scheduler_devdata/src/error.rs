// --- File: crates/scheduler_devdata/src/error.rs ---
use scheduler_api_client::ApiError;
use scheduler_common::{prerequisite_error, SchedulerError};
use scheduler_tables::TableStoreError;
use thiserror::Error;

/// Errors that end a dev-data run.
///
/// Failures of single records are logged and tallied instead.
#[derive(Error, Debug)]
pub enum DevDataError {
    #[error("Server is not running at {0}. Please start the server first")]
    ServerUnavailable(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(ApiError),

    #[error("Cannot connect to the table store: {0}")]
    TableStoreUnavailable(TableStoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    TableStore(#[from] TableStoreError),

    #[error("Event {0} not found")]
    EventNotFound(String),

    #[error("No event ids given")]
    NoEventIds,

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[from] std::io::Error),
}

impl From<DevDataError> for SchedulerError {
    fn from(err: DevDataError) -> Self {
        match err {
            DevDataError::ServerUnavailable(_)
            | DevDataError::AuthenticationFailed(_)
            | DevDataError::TableStoreUnavailable(_)
            | DevDataError::NoEventIds => prerequisite_error(err),
            DevDataError::Api(e) => e.into(),
            DevDataError::TableStore(e) => e.into(),
            DevDataError::EventNotFound(id) => SchedulerError::NotFoundError(format!("event {}", id)),
            DevDataError::Prompt(e) => e.into(),
        }
    }
}
