// --- File: crates/scheduler_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

// --- Booking REST API Config ---
// Credentials are for the local test user only.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String, // e.g. http://localhost:3001/api
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Timeout used for the reachability probe only.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    #[serde(default = "default_user_email")]
    pub user_email: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_user_password")]
    pub user_password: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            probe_timeout_secs: default_probe_timeout_secs(),
            user_email: default_user_email(),
            user_name: default_user_name(),
            user_password: default_user_password(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_probe_timeout_secs() -> u64 {
    5
}

fn default_user_email() -> String {
    "test@example.com".to_string()
}

fn default_user_name() -> String {
    "Test User".to_string()
}

fn default_user_password() -> String {
    "password123".to_string()
}

// --- Table Store Config ---
// Points at a local DynamoDB-compatible endpoint; the keys are dummies there.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TableStoreConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_dummy_key")]
    pub access_key_id: String,
    #[serde(default = "default_dummy_key")]
    pub secret_access_key: String,
    #[serde(default = "default_venues_table")]
    pub venues_table: String,
    #[serde(default = "default_events_table")]
    pub events_table: String,
    #[serde(default = "default_users_table")]
    pub users_table: String,
    #[serde(default = "default_table_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TableStoreConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            region: default_region(),
            access_key_id: default_dummy_key(),
            secret_access_key: default_dummy_key(),
            venues_table: default_venues_table(),
            events_table: default_events_table(),
            users_table: default_users_table(),
            timeout_secs: default_table_timeout_secs(),
        }
    }
}

fn default_endpoint_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_dummy_key() -> String {
    "dummy".to_string()
}

fn default_venues_table() -> String {
    "venues".to_string()
}

fn default_events_table() -> String {
    "events".to_string()
}

fn default_users_table() -> String {
    "users".to_string()
}

fn default_table_timeout_secs() -> u64 {
    30
}

// --- Dev Data Scripts Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DevDataConfig {
    /// Pause after wiping an existing venue before it is recreated.
    #[serde(default = "default_venue_cleanup_pause_ms")]
    pub venue_cleanup_pause_ms: u64,
    /// Pause after every successful delete during a full cleanup.
    #[serde(default = "default_delete_pause_ms")]
    pub delete_pause_ms: u64,
    /// Event ids removed by `delete-specific-events` when none are passed on the command line.
    #[serde(default)]
    pub purge_event_ids: Vec<String>,
}

impl Default for DevDataConfig {
    fn default() -> Self {
        Self {
            venue_cleanup_pause_ms: default_venue_cleanup_pause_ms(),
            delete_pause_ms: default_delete_pause_ms(),
            purge_event_ids: Vec::new(),
        }
    }
}

fn default_venue_cleanup_pause_ms() -> u64 {
    500
}

fn default_delete_pause_ms() -> u64 {
    100
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table_store: TableStoreConfig,
    #[serde(default)]
    pub dev_data: DevDataConfig,
}
