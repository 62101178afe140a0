// --- File: crates/scheduler_api_client/src/models.rs ---
//! Wire types for the booking API.
//!
//! Records read back from the API are kept as loosely typed JSON objects
//! because the server owns their shape; request bodies are typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The three entity kinds with their own REST collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Venue,
    Room,
    Event,
}

impl EntityKind {
    /// Kinds in safe deletion order: dependents first.
    pub const DELETION_ORDER: [EntityKind; 3] = [EntityKind::Event, EntityKind::Room, EntityKind::Venue];

    /// Singular label used in paths and messages, e.g. `venue`.
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Venue => "venue",
            EntityKind::Room => "room",
            EntityKind::Event => "event",
        }
    }

    /// Path segment of the REST collection, e.g. `venues`.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Venue => "venues",
            EntityKind::Room => "rooms",
            EntityKind::Event => "events",
        }
    }

    /// Name of the identity field, e.g. `venueId`.
    pub fn id_field(self) -> &'static str {
        match self {
            EntityKind::Venue => "venueId",
            EntityKind::Room => "roomId",
            EntityKind::Event => "eventId",
        }
    }

    /// Name of the kind-specific name field, e.g. `venueName`.
    pub fn name_field(self) -> &'static str {
        match self {
            EntityKind::Venue => "venueName",
            EntityKind::Room => "roomName",
            EntityKind::Event => "eventName",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `{ "data": ... }` envelope every API response uses.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// A record as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRecord(pub Map<String, Value>);

impl EntityRecord {
    /// String value of a field, if present and a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Identity of the record for the given kind.
    pub fn id(&self, kind: EntityKind) -> Option<&str> {
        self.str_field(kind.id_field()).filter(|id| !id.is_empty())
    }

    /// `name`, else `<kind>Name`, else `Unknown`.
    pub fn display_name(&self, kind: EntityKind) -> &str {
        self.str_field("name")
            .or_else(|| self.str_field(kind.name_field()))
            .unwrap_or("Unknown")
    }

    /// Venue the record belongs to (rooms and events).
    pub fn venue_id(&self) -> Option<&str> {
        self.str_field("venueId")
    }

    /// True if `venueName` (or `name`) equals the given venue name.
    pub fn has_venue_name(&self, venue_name: &str) -> bool {
        self.str_field("venueName")
            .or_else(|| self.str_field("name"))
            .is_some_and(|name| name == venue_name)
    }
}

/// Body of `POST /venues`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVenue {
    pub name: String,
    pub description: String,
    pub address: String,
    pub contact_phone: String,
    pub contact_email: String,
    #[serde(rename = "websiteURL")]
    pub website_url: String,
    pub capacity: u32,
    pub map_link: String,
}

/// Body of `POST /rooms`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub venue_id: String,
    pub name: String,
    pub capacity: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Social,
    Corporate,
}

/// Body of `POST /events`. Dates are `YYYY-MM-DD`, times `HH:MM`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub event_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub venue_name: String,
    pub venue_id: String,
    pub max_participants: u32,
    pub entry_fee: u32,
    pub event_type: EventType,
    pub is_public: bool,
    pub requires_approval: bool,
}

/// Body of `POST /event-rooms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventRoom {
    pub event_id: String,
    pub room_id: String,
    pub available_from: String,
    pub available_to: String,
}

impl NewEventRoom {
    /// Assignment whose availability window matches the event's time range.
    pub fn for_event(event_id: &str, room_id: &str, event: &NewEvent) -> Self {
        Self {
            event_id: event_id.to_string(),
            room_id: room_id.to_string(),
            available_from: format!("{}T{}:00", event.event_date, event.start_time),
            available_to: format!("{}T{}:00", event.end_date, event.end_time),
        }
    }
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub name: &'a str,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` of a successful login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> EntityRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_name_falls_back_to_kind_name_then_unknown() {
        let named = record(json!({"name": "Main Area", "roomName": "ignored"}));
        let kind_named = record(json!({"eventName": "Clockshire '25"}));
        let anonymous = record(json!({"eventId": "e-1"}));

        assert_eq!(named.display_name(EntityKind::Room), "Main Area");
        assert_eq!(kind_named.display_name(EntityKind::Event), "Clockshire '25");
        assert_eq!(anonymous.display_name(EntityKind::Event), "Unknown");
    }

    #[test]
    fn test_empty_id_counts_as_missing() {
        let rec = record(json!({"venueId": ""}));
        assert_eq!(rec.id(EntityKind::Venue), None);
    }

    #[test]
    fn test_event_room_window_uses_event_times() {
        let event = NewEvent {
            name: "Clocktower (Beginner Friendly)".into(),
            description: String::new(),
            event_date: "2026-11-10".into(),
            start_time: "19:00".into(),
            end_date: "2026-11-10".into(),
            end_time: "22:30".into(),
            venue_name: "Monkey Puzzle (Farnborough)".into(),
            venue_id: "v-1".into(),
            max_participants: 15,
            entry_fee: 0,
            event_type: EventType::Social,
            is_public: true,
            requires_approval: false,
        };

        let assignment = NewEventRoom::for_event("e-1", "r-1", &event);

        assert_eq!(assignment.available_from, "2026-11-10T19:00:00");
        assert_eq!(assignment.available_to, "2026-11-10T22:30:00");
    }

    #[test]
    fn test_new_venue_uses_api_field_names() {
        let venue = NewVenue {
            name: "Hall".into(),
            description: String::new(),
            address: String::new(),
            contact_phone: String::new(),
            contact_email: String::new(),
            website_url: "https://example.com".into(),
            capacity: 10,
            map_link: String::new(),
        };
        let value = serde_json::to_value(&venue).unwrap();
        assert_eq!(value["websiteURL"], "https://example.com");
        assert_eq!(value["contactPhone"], "");
        assert_eq!(value["mapLink"], "");
    }
}
