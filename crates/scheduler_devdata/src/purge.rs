// --- File: crates/scheduler_devdata/src/purge.rs ---
//! Deletes specific events directly from the events table.

use std::fmt;

use scheduler_tables::{composite_key, scan_all, Item, ItemExt, ScanRequest, TableStore};
use tracing::{error, info};

use crate::error::DevDataError;

/// Key of an event item: `PK = SK = EVENT#<id>`.
pub fn event_key(event_id: &str) -> Item {
    let key = format!("EVENT#{}", event_id);
    composite_key(key.clone(), key)
}

/// Event ids from the command line, else the configured ones.
///
/// Arguments naming a dotenv file (`.env`, `.env.local`, ...) are not ids.
pub fn requested_event_ids<I>(args: I, configured: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let ids: Vec<String> = args
        .into_iter()
        .filter(|arg| !arg.starts_with(".env"))
        .collect();
    if ids.is_empty() {
        configured.to_vec()
    } else {
        ids
    }
}

/// The fields shown for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub event_id: String,
    pub name: String,
    pub created_by: String,
    pub venue_id: String,
}

impl EventSummary {
    pub fn from_item(item: &Item, fallback_id: &str) -> Self {
        Self {
            event_id: item
                .str_attr("eventId")
                .unwrap_or(fallback_id)
                .to_string(),
            name: item.display_or("eventName", "Unknown"),
            created_by: item.display_or("createdBy", "Unknown"),
            venue_id: item.display_or("venueId", "None"),
        }
    }
}

/// A listing of the events table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventListing(pub Vec<EventSummary>);

impl fmt::Display for EventListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No events found.");
        }
        for (index, event) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "  - {} ({})", event.name, event.event_id)?;
            writeln!(f, "    Created by: {}", event.created_by)?;
            write!(f, "    Venue: {}", event.venue_id)?;
        }
        Ok(())
    }
}

/// Every event in the table.
pub async fn list_events<S: TableStore>(store: &S, table: &str) -> Result<EventListing, DevDataError> {
    let items = scan_all(store, &ScanRequest::table(table)).await?;
    Ok(EventListing(
        items
            .iter()
            .map(|item| EventSummary::from_item(item, "Unknown ID"))
            .collect(),
    ))
}

/// Outcome for one requested id.
#[derive(Debug)]
pub struct PurgeOutcome {
    pub event_id: String,
    /// Details of the deleted event, or why it was not deleted
    pub result: Result<EventSummary, DevDataError>,
}

#[derive(Debug, Default)]
pub struct PurgeReport {
    pub outcomes: Vec<PurgeOutcome>,
}

impl PurgeReport {
    pub fn successful(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.successful()
    }
}

impl fmt::Display for PurgeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "Deleting event: {}", outcome.event_id)?;
            match &outcome.result {
                Ok(event) => {
                    writeln!(f, "  📋 Event details:")?;
                    writeln!(f, "     - Name: {}", event.name)?;
                    writeln!(f, "     - Created by: {}", event.created_by)?;
                    writeln!(f, "     - Venue ID: {}", event.venue_id)?;
                    writeln!(f, "  ✅ Successfully deleted event {}", outcome.event_id)?;
                }
                Err(e) => writeln!(f, "  ❌ {}", e)?,
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "📊 Summary:")?;
        writeln!(f, "   ✅ Successfully deleted: {}", self.successful())?;
        writeln!(f, "   ❌ Failed to delete: {}", self.failed())?;
        write!(f, "   📝 Total processed: {}", self.outcomes.len())
    }
}

/// Deletes one event after checking it exists.
pub async fn purge_event<S: TableStore>(
    store: &S,
    table: &str,
    event_id: &str,
) -> Result<EventSummary, DevDataError> {
    let item = store
        .get_item(table, event_key(event_id))
        .await?
        .ok_or_else(|| DevDataError::EventNotFound(event_id.to_string()))?;
    let summary = EventSummary::from_item(&item, event_id);

    store.delete_item(table, event_key(event_id)).await?;
    Ok(summary)
}

/// Deletes each id in turn; a failure does not stop the rest.
pub async fn purge_events<S: TableStore>(store: &S, table: &str, event_ids: &[String]) -> PurgeReport {
    let mut report = PurgeReport::default();
    for event_id in event_ids {
        info!("Deleting event: {}", event_id);
        let result = purge_event(store, table, event_id).await;
        match &result {
            Ok(event) => info!("Deleted event {} ({})", event_id, event.name),
            Err(e) => error!("Error deleting event {}: {}", event_id, e),
        }
        report.outcomes.push(PurgeOutcome {
            event_id: event_id.clone(),
            result,
        });
    }
    report
}
