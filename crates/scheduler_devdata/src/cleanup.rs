// --- File: crates/scheduler_devdata/src/cleanup.rs ---
//! Removes every event, room and venue through the booking API.

use std::fmt;
use std::time::Duration;

use scheduler_api_client::{list_or_empty, EntityApi, EntityKind, EntityRecord};
use tracing::{error, info, warn};

use crate::error::DevDataError;

/// Outcome for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTally {
    pub kind: EntityKind,
    pub deleted: usize,
    pub total: usize,
}

/// Outcome of a full cleanup, in deletion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub tallies: Vec<KindTally>,
}

impl CleanupReport {
    pub fn total_deleted(&self) -> usize {
        self.tallies.iter().map(|t| t.deleted).sum()
    }

    pub fn total_found(&self) -> usize {
        self.tallies.iter().map(|t| t.total).sum()
    }
}

impl fmt::Display for CleanupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🎯 Cleanup Complete!")?;
        for tally in &self.tallies {
            writeln!(
                f,
                "   Deleted {}/{} {}",
                tally.deleted,
                tally.total,
                tally.kind.collection()
            )?;
        }
        writeln!(f, "   📊 Total entities deleted: {}", self.total_deleted())?;
        let failed = self.total_found() - self.total_deleted();
        if self.total_found() == 0 {
            write!(f, "   No data found to delete")
        } else if failed > 0 {
            write!(f, "   ⚠️  {} entities could not be deleted", failed)
        } else {
            write!(f, "   ✅ All development data has been removed")
        }
    }
}

/// Deletes the given records one by one and returns how many succeeded.
///
/// Records without an id are skipped. `pause` follows every successful delete.
pub async fn delete_records<A: EntityApi>(
    api: &A,
    kind: EntityKind,
    records: &[EntityRecord],
    pause: Duration,
) -> usize {
    let mut deleted = 0;
    for record in records {
        let Some(id) = record.id(kind) else {
            warn!("Skipping {} without id", kind);
            continue;
        };
        let name = record.display_name(kind);

        info!("Deleting {}: {} ({})", kind, name, id);
        match api.delete(kind, id).await {
            Ok(()) => {
                deleted += 1;
                if !pause.is_zero() {
                    tokio::time::sleep(pause).await;
                }
            }
            Err(e) => error!("Failed to delete {} {} ({}): {}", kind, name, id, e),
        }
    }
    deleted
}

/// Deletes all events, then all rooms, then all venues.
///
/// Aborts before deleting anything unless the venues collection answers 200.
pub async fn delete_all_data<A: EntityApi>(
    api: &A,
    base_url: &str,
    pause: Duration,
) -> Result<CleanupReport, DevDataError> {
    info!("Checking if server is running...");
    if !api.check_api_open().await {
        return Err(DevDataError::ServerUnavailable(base_url.to_string()));
    }
    info!("Server is running");

    let mut report = CleanupReport::default();
    for kind in EntityKind::DELETION_ORDER {
        info!("Deleting all {}...", kind.collection());
        let records = list_or_empty(api, kind).await;
        if records.is_empty() {
            info!("No {} found", kind.collection());
        }

        let deleted = delete_records(api, kind, &records, pause).await;
        info!("Deleted {}/{} {}", deleted, records.len(), kind.collection());
        report.tallies.push(KindTally {
            kind,
            deleted,
            total: records.len(),
        });
    }

    Ok(report)
}
