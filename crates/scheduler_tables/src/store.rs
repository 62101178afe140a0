// --- File: crates/scheduler_tables/src/store.rs ---
//! The table store abstraction and paginated scanning on top of it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use tracing::{debug, warn};

use crate::attribute::{AttributeValue, Item, ItemExt};
use crate::error::TableStoreError;

/// Body of a `Scan` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanRequest {
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_key: Option<Item>,
}

impl ScanRequest {
    /// Unfiltered scan of a table.
    pub fn table(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Keeps only items where `attribute = placeholder`, with the
    /// placeholder bound to a string value (e.g. `SK = :sk`).
    pub fn where_eq(mut self, attribute: &str, placeholder: &str, value: impl Into<String>) -> Self {
        self.filter_expression = Some(format!("{} = {}", attribute, placeholder));
        self.expression_attribute_values
            .insert(placeholder.to_string(), AttributeValue::string(value));
        self
    }

    fn starting_at(&self, key: Option<Item>) -> Self {
        Self {
            exclusive_start_key: key,
            ..self.clone()
        }
    }
}

/// One page of scan results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanPage {
    #[serde(default)]
    pub items: Vec<Item>,
    /// Present while more pages remain
    #[serde(default)]
    pub last_evaluated_key: Option<Item>,
}

/// Operations of the key-value table store.
pub trait TableStore: Send + Sync {
    /// Names of all tables; doubles as a connection probe.
    fn list_tables(&self) -> impl Future<Output = Result<Vec<String>, TableStoreError>> + Send;

    /// Item by primary key, `None` if absent.
    fn get_item(&self, table: &str, key: Item)
        -> impl Future<Output = Result<Option<Item>, TableStoreError>> + Send;

    /// Deletes an item by primary key. Deleting a missing item is not an error.
    fn delete_item(&self, table: &str, key: Item)
        -> impl Future<Output = Result<(), TableStoreError>> + Send;

    /// A single scan page.
    fn scan(&self, request: &ScanRequest)
        -> impl Future<Output = Result<ScanPage, TableStoreError>> + Send;
}

/// Scans every page, following continuation keys until none remain.
///
/// Items are deduplicated on their `PK`/`SK` pair; items without one are kept as is.
/// A continuation key that was already sent ends the scan.
pub async fn scan_all<S: TableStore>(
    store: &S,
    request: &ScanRequest,
) -> Result<Vec<Item>, TableStoreError> {
    let mut items = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut sent_keys: HashSet<(String, String)> = HashSet::new();
    let mut start_key: Option<Item> = None;
    let mut pages = 0usize;

    loop {
        let page = store.scan(&request.starting_at(start_key.clone())).await?;
        pages += 1;

        for item in page.items {
            let is_new = match item.primary_key() {
                Some((pk, sk)) => seen.insert((pk.to_string(), sk.to_string())),
                None => true,
            };
            if is_new {
                items.push(item);
            }
        }

        let Some(next) = page.last_evaluated_key else {
            break;
        };
        let already_sent = match next.primary_key() {
            Some((pk, sk)) => !sent_keys.insert((pk.to_string(), sk.to_string())),
            None => start_key.as_ref() == Some(&next),
        };
        if already_sent {
            warn!(
                "Scan of {} returned continuation key {:?} again, stopping",
                request.table_name,
                next.primary_key()
            );
            break;
        }
        start_key = Some(next);
    }

    debug!(
        "Scanned {} items from {} in {} page(s)",
        items.len(),
        request.table_name,
        pages
    );
    Ok(items)
}
