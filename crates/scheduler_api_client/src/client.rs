//! HTTP implementation of [`EntityApi`].
//!
//! Talks JSON to the booking API, e.g. `GET {base_url}/venues`, and unwraps
//! the `{ "data": ... }` envelopes.

use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use scheduler_common::create_json_client;
use scheduler_config::ApiConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::models::{
    EntityKind, EntityRecord, Envelope, LoginRequest, NewEventRoom, Session, SignupRequest,
};
use crate::service::EntityApi;

/// Credentials of the local test user.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Client for the booking REST API.
pub struct HttpEntityApi {
    /// Client for regular calls
    client: Client,

    /// Client with the short probe timeout
    probe_client: Client,

    /// Base URL including the `/api` prefix, without trailing slash
    base_url: String,

    credentials: Credentials,

    /// Bearer token, set by [`EntityApi::authenticate`]
    session_token: Option<String>,
}

impl HttpEntityApi {
    /// Creates a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: create_json_client(config.timeout_secs, HeaderMap::new())?,
            probe_client: create_json_client(config.probe_timeout_secs, HeaderMap::new())?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: Credentials {
                email: config.user_email.clone(),
                name: config.user_name.clone(),
                password: config.user_password.clone(),
            },
            session_token: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    /// The web root the API is mounted under (`/api` suffix removed).
    fn root_url(&self) -> String {
        let root = self.base_url.strip_suffix("/api").unwrap_or(&self.base_url);
        format!("{}/", root)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Status of a bare GET, or the transport error if no response came back.
    async fn probe(&self, url: &str) -> Result<StatusCode, reqwest::Error> {
        let status = self.probe_client.get(url).send().await?.status();
        debug!("Probe of {} answered {}", url, status);
        Ok(status)
    }
}

/// Passes success responses through and turns anything else into a status error.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiError::StatusError {
        status_code: status.as_u16(),
        message,
    })
}

/// Reads the body and unwraps the `data` envelope.
async fn read_data<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let body = response.text().await?;
    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| ApiError::DecodeError(e.to_string()))?;
    Ok(envelope.data)
}

impl EntityApi for HttpEntityApi {
    async fn check_server(&self) -> bool {
        let root = self.root_url();
        match self.probe(&root).await {
            Ok(status) => status == StatusCode::OK,
            Err(e) => {
                debug!("Probe of {} failed: {}", root, e);
                // 401 means the server is up but wants credentials
                matches!(
                    self.probe(&self.url("venues")).await,
                    Ok(StatusCode::OK) | Ok(StatusCode::UNAUTHORIZED)
                )
            }
        }
    }

    async fn check_api_open(&self) -> bool {
        matches!(self.probe(&self.url("venues")).await, Ok(StatusCode::OK))
    }

    async fn authenticate(&mut self) -> Result<(), ApiError> {
        let signup = SignupRequest {
            email: &self.credentials.email,
            name: &self.credentials.name,
        };
        let signup_response = self.client.post(self.url("auth/signup")).json(&signup).send().await?;
        // 409: the user already exists
        if !matches!(signup_response.status().as_u16(), 200 | 201 | 409) {
            warn!("Signup failed: {}", signup_response.status().as_u16());
        }

        let login = LoginRequest {
            email: &self.credentials.email,
            password: &self.credentials.password,
        };
        let login_response = self.client.post(self.url("auth/login")).json(&login).send().await?;
        if login_response.status() != StatusCode::OK {
            return Err(ApiError::StatusError {
                status_code: login_response.status().as_u16(),
                message: "Login failed".to_string(),
            });
        }

        let session: Option<Session> = read_data(login_response).await?;
        let token = session
            .and_then(|s| s.session_token)
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingSessionToken)?;
        self.session_token = Some(token);
        info!("Authentication successful");
        Ok(())
    }

    async fn list(&self, kind: EntityKind) -> Result<Vec<EntityRecord>, ApiError> {
        let response = self.authorized(self.client.get(self.url(kind.collection()))).send().await?;
        let records: Option<Vec<EntityRecord>> = read_data(ensure_success(response).await?).await?;
        Ok(records.unwrap_or_default())
    }

    async fn get(&self, kind: EntityKind, id: &str) -> Result<EntityRecord, ApiError> {
        let url = self.url(&format!("{}/{}", kind.collection(), id));
        let response = self.authorized(self.client.get(url)).send().await?;
        let record: Option<EntityRecord> = read_data(ensure_success(response).await?).await?;
        record.ok_or_else(|| ApiError::DecodeError(format!("empty {} payload", kind)))
    }

    async fn create(&self, kind: EntityKind, body: Value) -> Result<String, ApiError> {
        let request = self.client.post(self.url(kind.collection())).json(&body);
        let response = self.authorized(request).send().await?;
        let record: Option<EntityRecord> = read_data(ensure_success(response).await?).await?;
        record
            .as_ref()
            .and_then(|r| r.id(kind))
            .map(str::to_string)
            .ok_or(ApiError::MissingId(kind.label()))
    }

    async fn delete(&self, kind: EntityKind, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("{}/{}", kind.collection(), id));
        let response = self.authorized(self.client.delete(url)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn assign_room(&self, assignment: &NewEventRoom) -> Result<(), ApiError> {
        let request = self.client.post(self.url("event-rooms")).json(assignment);
        let response = self.authorized(request).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
