// --- File: crates/scheduler_devdata/src/seed.rs ---
//! Idempotent creation of the sample catalog through the booking API.
//!
//! A venue that already exists (matched by name) is removed together with its
//! rooms and events before it is created again, so repeated runs converge on
//! the same data set.

use std::fmt;
use std::time::Duration;

use scheduler_api_client::{
    list_or_empty, ApiError, EntityApi, EntityKind, EntityRecord, NewEventRoom, NewRoom,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::catalog::Catalog;
use crate::cleanup::delete_records;
use crate::error::DevDataError;

#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Pause after removing a pre-existing venue
    pub venue_cleanup_pause: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedVenue {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRoom {
    pub id: String,
    pub name: String,
    pub venue_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEvent {
    pub id: String,
    pub name: String,
    pub venue_name: String,
}

/// What a seed run created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub venues: Vec<CreatedVenue>,
    pub rooms: Vec<CreatedRoom>,
    pub events: Vec<CreatedEvent>,
    pub rooms_assigned: usize,
    pub room_assignments_failed: usize,
}

impl SeedReport {
    fn venue_id(&self, venue_name: &str) -> Option<&str> {
        self.venues
            .iter()
            .find(|v| v.name == venue_name)
            .map(|v| v.id.as_str())
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 Population Complete!")?;
        writeln!(f, "   📊 Created {} venues", self.venues.len())?;
        writeln!(f, "   🏠 Created {} rooms", self.rooms.len())?;
        writeln!(f, "   🎉 Created {} events", self.events.len())?;
        if self.rooms_assigned + self.room_assignments_failed > 0 {
            writeln!(
                f,
                "   🔗 Assigned {} rooms to events ({} failed)",
                self.rooms_assigned, self.room_assignments_failed
            )?;
        }

        writeln!(f, "\n📋 Created Venue IDs:")?;
        for venue in &self.venues {
            writeln!(f, "   • {}: {}", venue.name, venue.id)?;
        }
        writeln!(f, "\n🏠 Created Room IDs:")?;
        for room in &self.rooms {
            writeln!(f, "   • {} ({}): {}", room.name, room.venue_name, room.id)?;
        }
        write!(f, "\n🎉 Created Event IDs:")?;
        for event in &self.events {
            write!(f, "\n   • {}: {}", event.name, event.id)?;
        }
        Ok(())
    }
}

/// Checks that the server is up and logs in the test user.
pub async fn prepare_session<A: EntityApi>(api: &mut A, base_url: &str) -> Result<(), DevDataError> {
    info!("Checking if server is running...");
    if !api.check_server().await {
        return Err(DevDataError::ServerUnavailable(base_url.to_string()));
    }
    info!("Server is running");

    info!("Authenticating...");
    api.authenticate()
        .await
        .map_err(DevDataError::AuthenticationFailed)
}

/// Creates the catalog, replacing venues that already exist by name.
///
/// Fails only when the server is down or login fails; every other failure is
/// logged and the run carries on with what could be created.
pub async fn populate<A: EntityApi>(
    api: &mut A,
    base_url: &str,
    catalog: &Catalog,
    options: &SeedOptions,
) -> Result<SeedReport, DevDataError> {
    prepare_session(api, base_url).await?;
    let api = &*api;
    let mut report = SeedReport::default();

    info!("Creating venues...");
    for spec in &catalog.venues {
        let name = spec.name();
        info!("Processing venue: {}", name);

        if let Some(existing) = find_venue_by_name(api, name).await {
            match existing.id(EntityKind::Venue) {
                Some(id) => {
                    info!("Venue already exists, cleaning up and recreating...");
                    remove_venue(api, id, name, options.venue_cleanup_pause).await;
                }
                None => warn!("Existing venue {} has no id, leaving it in place", name),
            }
        }

        match create_record(api, EntityKind::Venue, &spec.venue).await {
            Ok(id) => {
                info!("Created venue: {} (ID: {})", name, id);
                report.venues.push(CreatedVenue { id, name: name.to_string() });
            }
            Err(e) => error!("Failed to create venue {}: {}", name, e),
        }
    }

    info!("Creating rooms...");
    for spec in &catalog.venues {
        let Some(venue_id) = report.venue_id(spec.name()).map(str::to_string) else {
            warn!("Skipping rooms for {} - venue not created", spec.name());
            continue;
        };

        for room in &spec.rooms {
            let body = NewRoom {
                venue_id: venue_id.clone(),
                name: room.name.clone(),
                capacity: room.capacity,
                description: room.description.clone(),
            };
            match create_record(api, EntityKind::Room, &body).await {
                Ok(id) => {
                    info!("Created room: {} (ID: {})", room.name, id);
                    report.rooms.push(CreatedRoom {
                        id,
                        name: room.name.clone(),
                        venue_name: spec.name().to_string(),
                    });
                }
                Err(e) => error!("Failed to create room {}: {}", room.name, e),
            }
        }
    }

    info!("Creating events...");
    for draft in &catalog.events {
        let Some(venue_id) = report.venue_id(&draft.venue_name).map(str::to_string) else {
            warn!("Skipping event {} - venue not created", draft.name);
            continue;
        };

        let mut event = draft.clone();
        event.venue_id = venue_id;
        let event_id = match create_record(api, EntityKind::Event, &event).await {
            Ok(id) => id,
            Err(e) => {
                error!("Failed to create event {}: {}", event.name, e);
                continue;
            }
        };
        info!("Created event: {} (ID: {})", event.name, event_id);

        let assigns_rooms = catalog
            .venue(&event.venue_name)
            .is_some_and(|v| v.assign_rooms_to_events);
        if assigns_rooms {
            info!("Assigning rooms to {}...", event.name);
            for room in report.rooms.iter().filter(|r| r.venue_name == event.venue_name) {
                let assignment = NewEventRoom::for_event(&event_id, &room.id, &event);
                match api.assign_room(&assignment).await {
                    Ok(()) => {
                        info!("Assigned room: {}", room.name);
                        report.rooms_assigned += 1;
                    }
                    Err(e) => {
                        error!("Failed to assign room {} to event {}: {}", room.id, event_id, e);
                        report.room_assignments_failed += 1;
                    }
                }
            }
        }

        report.events.push(CreatedEvent {
            id: event_id,
            name: event.name,
            venue_name: event.venue_name,
        });
    }

    Ok(report)
}

/// The first venue whose name matches, if any.
pub async fn find_venue_by_name<A: EntityApi>(api: &A, name: &str) -> Option<EntityRecord> {
    list_or_empty(api, EntityKind::Venue)
        .await
        .into_iter()
        .find(|venue| venue.has_venue_name(name))
}

/// Deletes a venue after its events and rooms, then pauses.
async fn remove_venue<A: EntityApi>(api: &A, venue_id: &str, venue_name: &str, pause: Duration) {
    info!("Cleaning up existing data for {}...", venue_name);

    for kind in [EntityKind::Event, EntityKind::Room] {
        let owned: Vec<EntityRecord> = list_or_empty(api, kind)
            .await
            .into_iter()
            .filter(|record| record.venue_id() == Some(venue_id))
            .collect();
        delete_records(api, kind, &owned, Duration::ZERO).await;
    }

    info!("Deleting venue: {}", venue_id);
    if let Err(e) = api.delete(EntityKind::Venue, venue_id).await {
        warn!("Failed to delete venue {}: {}", venue_id, e);
    }

    if !pause.is_zero() {
        tokio::time::sleep(pause).await;
    }
}

async fn create_record<A: EntityApi, T: Serialize>(
    api: &A,
    kind: EntityKind,
    body: &T,
) -> Result<String, ApiError> {
    let body = serde_json::to_value(body)?;
    api.create(kind, body).await
}
