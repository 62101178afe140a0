// --- File: crates/scheduler_api_client/src/lib.rs ---
//! Client for the booking REST API (venues, rooms, events, event-room assignments).

pub mod client;
pub mod error;
pub mod models;
pub mod service;

pub use client::{Credentials, HttpEntityApi};
pub use error::ApiError;
pub use models::{EntityKind, EntityRecord, EventType, NewEvent, NewEventRoom, NewRoom, NewVenue};
pub use service::{list_or_empty, EntityApi};
