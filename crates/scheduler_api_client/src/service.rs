// --- File: crates/scheduler_api_client/src/service.rs ---
//! The entity API abstraction.
//!
//! The dev-data orchestrators are written against this trait so they can be
//! driven by the real HTTP client or by an in-memory fake in tests.

use std::future::Future;

use serde_json::Value;
use tracing::error;

use crate::error::ApiError;
use crate::models::{EntityKind, EntityRecord, NewEventRoom};

/// Operations the booking API offers for venues, rooms, events and event-room assignments.
pub trait EntityApi: Send + Sync {
    /// Lenient reachability probe: the root page answers 200. Only when the
    /// root cannot be reached at all does the venues collection answering
    /// 200 or 401 (running but protected) count instead.
    fn check_server(&self) -> impl Future<Output = bool> + Send;

    /// Strict reachability probe: the venues collection answers 200 without credentials.
    fn check_api_open(&self) -> impl Future<Output = bool> + Send;

    /// Sign up the configured test user (an existing user is fine), then log
    /// in and use the returned session token for every following request.
    fn authenticate(&mut self) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// All records of a kind.
    fn list(&self, kind: EntityKind)
        -> impl Future<Output = Result<Vec<EntityRecord>, ApiError>> + Send;

    /// One record by id.
    fn get(&self, kind: EntityKind, id: &str)
        -> impl Future<Output = Result<EntityRecord, ApiError>> + Send;

    /// Create a record and return its new id.
    fn create(&self, kind: EntityKind, body: Value)
        -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Delete a record by id.
    fn delete(&self, kind: EntityKind, id: &str)
        -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Assign a room to an event for the given availability window.
    fn assign_room(&self, assignment: &NewEventRoom)
        -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// Lists records of a kind, logging a failure and treating it as "none found".
pub async fn list_or_empty<A: EntityApi>(api: &A, kind: EntityKind) -> Vec<EntityRecord> {
    match api.list(kind).await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to fetch {}: {}", kind.collection(), e);
            Vec::new()
        }
    }
}
