// --- File: crates/scheduler_tables/src/client.rs ---
//! [`TableStore`] over the DynamoDB JSON protocol.
//!
//! Every operation is a signed `POST /` with an `X-Amz-Target` header naming it.

use chrono::Utc;
use reqwest::{Client, Url};
use scheduler_common::create_client;
use scheduler_config::TableStoreConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::attribute::Item;
use crate::error::TableStoreError;
use crate::sigv4::{sign, SignableRequest, SigningParams};
use crate::store::{ScanPage, ScanRequest, TableStore};

const CONTENT_TYPE: &str = "application/x-amz-json-1.0";
const TARGET_PREFIX: &str = "DynamoDB_20120810";
const SERVICE: &str = "dynamodb";

/// Table store client for a DynamoDB-compatible endpoint.
pub struct DynamoTableStore {
    client: Client,
    endpoint: Url,
    /// `host[:port]` as sent in the `Host` header
    host: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListTablesOutput {
    #[serde(default)]
    table_names: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetItemOutput {
    #[serde(default)]
    item: Option<Item>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct KeyInput<'a> {
    table_name: &'a str,
    key: Item,
}

/// Error body, e.g. `{"__type":"com.amazonaws.dynamodb.v20120810#ResourceNotFoundException","message":"..."}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    error_type: String,
    #[serde(alias = "Message", default)]
    message: String,
}

impl DynamoTableStore {
    /// Creates a client from the `[table_store]` configuration section.
    pub fn new(config: &TableStoreConfig) -> Result<Self, TableStoreError> {
        let endpoint = Url::parse(&config.endpoint_url)
            .map_err(|e| TableStoreError::InvalidEndpoint(format!("{}: {}", config.endpoint_url, e)))?;
        let host = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            (None, _) => {
                return Err(TableStoreError::InvalidEndpoint(format!(
                    "{}: missing host",
                    config.endpoint_url
                )))
            }
        };

        Ok(Self {
            client: create_client(config.timeout_secs, true)?,
            endpoint,
            host,
            region: config.region.clone(),
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
        })
    }

    async fn call<B, T>(&self, operation: &str, body: &B) -> Result<T, TableStoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let target = format!("{}.{}", TARGET_PREFIX, operation);

        let signed = sign(
            &SigningParams {
                access_key_id: &self.access_key_id,
                secret_access_key: &self.secret_access_key,
                region: &self.region,
                service: SERVICE,
            },
            &SignableRequest {
                host: &self.host,
                path: self.endpoint.path(),
                content_type: CONTENT_TYPE,
                target: &target,
                body: &payload,
            },
            Utc::now(),
        )?;

        debug!("Table store call {}", target);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("content-type", CONTENT_TYPE)
            .header("x-amz-date", signed.amz_date)
            .header("x-amz-target", &target)
            .header("authorization", signed.authorization)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let error: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let code = error
                .error_type
                .rsplit('#')
                .next()
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            let message = if error.message.is_empty() { text } else { error.message };
            return Err(TableStoreError::ServiceError { code, message });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl TableStore for DynamoTableStore {
    async fn list_tables(&self) -> Result<Vec<String>, TableStoreError> {
        let output: ListTablesOutput = self.call("ListTables", &json!({})).await?;
        info!("Table store connection successful ({} tables)", output.table_names.len());
        Ok(output.table_names)
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>, TableStoreError> {
        let output: GetItemOutput = self
            .call("GetItem", &KeyInput { table_name: table, key })
            .await?;
        Ok(output.item)
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<(), TableStoreError> {
        let _: serde_json::Value = self
            .call("DeleteItem", &KeyInput { table_name: table, key })
            .await?;
        Ok(())
    }

    async fn scan(&self, request: &ScanRequest) -> Result<ScanPage, TableStoreError> {
        self.call("Scan", request).await
    }
}
