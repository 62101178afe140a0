// --- File: crates/scheduler_tables/src/lib.rs ---
//! Direct access to the key-value table store: get, delete, paginated scan
//! and a list-tables connection probe.

pub mod attribute;
pub mod client;
pub mod error;
pub mod sigv4;
pub mod store;

pub use attribute::{composite_key, AttributeValue, Item, ItemExt};
pub use client::DynamoTableStore;
pub use error::TableStoreError;
pub use store::{scan_all, ScanPage, ScanRequest, TableStore};
