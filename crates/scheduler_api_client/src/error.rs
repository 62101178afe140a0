// --- File: crates/scheduler_api_client/src/error.rs ---
use scheduler_common::{external_service_error, SchedulerError};
use thiserror::Error;

/// Errors returned by the booking API client.
///
/// The kinds stay distinct here; callers that only care about success or
/// failure log the message and move on.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status_code}: {message}")]
    StatusError { status_code: u16, message: String },

    /// The response body was not the expected `{ "data": ... }` envelope
    #[error("Failed to decode API response: {0}")]
    DecodeError(String),

    /// A request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// A create call succeeded but the payload carried no id
    #[error("No {0} ID returned")]
    MissingId(&'static str),

    /// Login succeeded but no session token came back
    #[error("No session token received")]
    MissingSessionToken,
}

impl From<ApiError> for SchedulerError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestError(e) => SchedulerError::HttpError(format!("Booking API request error: {}", e)),
            ApiError::StatusError { status_code: 401, message } => SchedulerError::AuthError(message),
            ApiError::StatusError { status_code, message } => external_service_error(
                "Booking API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            ApiError::DecodeError(msg) => SchedulerError::ParseError(format!("Booking API response: {}", msg)),
            ApiError::EncodeError(e) => SchedulerError::InternalError(format!("Booking API request body: {}", e)),
            ApiError::MissingId(kind) => external_service_error("Booking API", format!("No {} ID returned", kind)),
            ApiError::MissingSessionToken => SchedulerError::AuthError("No session token received".to_string()),
        }
    }
}
