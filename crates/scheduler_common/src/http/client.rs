// --- File: crates/scheduler_common/src/http/client.rs ---
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Creates a new HTTP client with custom configuration.
///
/// # Arguments
///
/// * `timeout_secs` - The timeout in seconds for the client
/// * `follow_redirects` - Whether the client should follow redirects
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(redirect_policy(follow_redirects))
        .build()
}

/// Creates an HTTP client that sends `Content-Type: application/json` plus
/// any extra default headers on every request.
pub fn create_json_client(
    timeout_secs: u64,
    mut default_headers: HeaderMap,
) -> Result<Client, ReqwestError> {
    default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(redirect_policy(true))
        .default_headers(default_headers)
        .build()
}

fn redirect_policy(follow_redirects: bool) -> reqwest::redirect::Policy {
    if follow_redirects {
        reqwest::redirect::Policy::default()
    } else {
        reqwest::redirect::Policy::none()
    }
}
