// --- File: crates/scheduler_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by all Scheduler crates.
///
/// Each crate keeps its own error enum and implements `From<ItsError> for SchedulerError`.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// A precondition for running an operation was not met (e.g. server down)
    #[error("Prerequisite not met: {0}")]
    PrerequisiteError(String),

    /// The user declined a confirmation prompt
    #[error("Operation cancelled: {0}")]
    CancelledError(String),

    /// The process received an interrupt while the operation was running
    #[error("Operation interrupted by user")]
    InterruptedError,

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SchedulerError {
    fn status_code(&self) -> u16 {
        match self {
            SchedulerError::HttpError(_) => 500,
            SchedulerError::ParseError(_) => 400,
            SchedulerError::ConfigError(_) => 500,
            SchedulerError::AuthError(_) => 401,
            SchedulerError::NotFoundError(_) => 404,
            SchedulerError::ExternalServiceError { .. } => 502,
            SchedulerError::PrerequisiteError(_) => 503,
            SchedulerError::CancelledError(_) => 499,
            SchedulerError::InterruptedError => 499,
            SchedulerError::InternalError(_) => 500,
        }
    }
}

impl SchedulerError {
    /// Process exit status for command line tools.
    ///
    /// A cancelled prompt is a normal outcome; everything else is a failure.
    pub fn exit_status(&self) -> u8 {
        match self {
            SchedulerError::CancelledError(_) => 0,
            _ => 1,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for SchedulerError {
    fn from(err: reqwest::Error) -> Self {
        SchedulerError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        SchedulerError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn prerequisite_error<T: fmt::Display>(message: T) -> SchedulerError {
    SchedulerError::PrerequisiteError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SchedulerError {
    SchedulerError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> SchedulerError {
    SchedulerError::InternalError(message.to_string())
}
