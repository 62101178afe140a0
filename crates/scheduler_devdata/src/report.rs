// --- File: crates/scheduler_devdata/src/report.rs ---
//! Venue listing straight from table storage, joined with the creating user.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use scheduler_tables::{composite_key, scan_all, Item, ItemExt, ScanRequest, TableStore};
use tracing::{info, warn};

use crate::error::DevDataError;

const RULE_WIDTH: usize = 80;
const DESCRIPTION_LIMIT: usize = 100;

/// Table names the report reads.
#[derive(Debug, Clone)]
pub struct ReportTables<'a> {
    pub venues: &'a str,
    pub users: &'a str,
}

/// Venues (newest first) and the users that created them, keyed by `userId`.
#[derive(Debug, Clone, Default)]
pub struct VenueReport {
    pub venues: Vec<Item>,
    pub users: HashMap<String, Item>,
}

/// Loads every venue and its creator.
///
/// Fails when the table store does not answer a list-tables probe.
pub async fn load_venue_report<S: TableStore>(
    store: &S,
    tables: &ReportTables<'_>,
) -> Result<VenueReport, DevDataError> {
    store
        .list_tables()
        .await
        .map_err(DevDataError::TableStoreUnavailable)?;

    info!("Fetching venues...");
    let request = ScanRequest::table(tables.venues).where_eq("entityType", ":entityType", "VENUE");
    let mut venues = scan_all(store, &request).await?;
    sort_newest_first(&mut venues);

    let mut users = HashMap::new();
    if venues.is_empty() {
        return Ok(VenueReport { venues, users });
    }

    info!("Fetching user information...");
    let request = ScanRequest::table(tables.users).where_eq("SK", ":sk", "PROFILE");
    for user in scan_all(store, &request).await? {
        if let Some(user_id) = user.str_attr("userId") {
            users.insert(user_id.to_string(), user.clone());
        }
    }

    // Creators the scan missed get a direct lookup
    let mut missing: Vec<String> = venues
        .iter()
        .filter_map(creator_id)
        .filter(|id| !users.contains_key(*id))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing.dedup();
    for user_id in missing {
        let key = composite_key(format!("USER#{}", user_id), "PROFILE");
        match store.get_item(tables.users, key).await {
            Ok(Some(user)) => {
                users.insert(user_id, user);
            }
            Ok(None) => {}
            Err(e) => warn!("Error fetching user {}: {}", user_id, e),
        }
    }

    Ok(VenueReport { venues, users })
}

/// Sorts on the raw `createdAt` string, newest first; venues without one go last.
pub fn sort_newest_first(venues: &mut [Item]) {
    venues.sort_by(|a, b| {
        let a = a.str_attr("createdAt").unwrap_or("");
        let b = b.str_attr("createdAt").unwrap_or("");
        b.cmp(a)
    });
}

fn creator_id(venue: &Item) -> Option<&str> {
    venue.str_attr("createdBy").filter(|id| !id.is_empty())
}

/// `%Y-%m-%d %H:%M:%S` for ISO-8601 timestamps, the raw string otherwise.
pub fn format_created_at(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";
    if raw.is_empty() {
        return "Unknown".to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return format!("{} 00:00:00", date.format("%Y-%m-%d"));
    }
    raw.to_string()
}

/// First 100 characters, with `...` when cut.
pub fn truncate_description(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

impl VenueReport {
    fn user_label(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).map(|user| {
            format!(
                "{} ({})",
                user.display_or("name", "Unknown Name"),
                user.display_or("email", "Unknown Email")
            )
        })
    }

    fn creator_info(&self, venue: &Item) -> String {
        match creator_id(venue) {
            Some(id) => self
                .user_label(id)
                .unwrap_or_else(|| format!("User ID: {} (not found in users table)", id)),
            None => "Unknown Creator".to_string(),
        }
    }

    /// Venue counts per creator, largest first; ties keep first-seen order.
    pub fn counts_by_creator(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for venue in &self.venues {
            let creator = creator_id(venue).unwrap_or("Unknown");
            match counts.iter_mut().find(|(id, _)| id == creator) {
                Some((_, count)) => *count += 1,
                None => counts.push((creator.to_string(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn venues_without_creator(&self) -> Vec<&Item> {
        self.venues.iter().filter(|v| creator_id(v).is_none()).collect()
    }

    /// The full human-readable listing.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VenueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "🏢 Venue Listing Report")?;
        writeln!(f, "{}", rule)?;

        if self.venues.is_empty() {
            writeln!(f, "No venues found in the database.\n")?;
            return self.fmt_orphans(f);
        }

        writeln!(f, "📊 Found {} venues:", self.venues.len())?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for (index, venue) in self.venues.iter().enumerate() {
            writeln!(f, "\n{}. {}", index + 1, venue.display_or("venueName", "Unknown Venue"))?;
            writeln!(f, "   ID: {}", venue.display_or("venueId", "Unknown ID"))?;
            writeln!(f, "   Address: {}", venue.display_or("address", "No address"))?;
            writeln!(f, "   Capacity: {}", venue.display_or("capacity", "0"))?;
            writeln!(
                f,
                "   Created: {}",
                format_created_at(venue.str_attr("createdAt").unwrap_or(""))
            )?;
            writeln!(f, "   Creator: {}", self.creator_info(venue))?;

            if let Some(description) = venue.str_attr("description").filter(|d| !d.is_empty()) {
                writeln!(f, "   Description: {}", truncate_description(description))?;
            }
            if let Some(contact) = venue.str_attr("contactEmail").filter(|c| !c.is_empty()) {
                writeln!(f, "   Contact: {}", contact)?;
            }
            if let Some(website) = venue.str_attr("websiteURL").filter(|w| !w.is_empty()) {
                writeln!(f, "   Website: {}", website)?;
            }
        }

        writeln!(f, "\n{}", rule)?;
        writeln!(f, "📊 Summary: {} venues found", self.venues.len())?;
        writeln!(f, "\n👥 Venues by Creator:")?;
        for (creator, count) in self.counts_by_creator() {
            match self.user_label(&creator) {
                Some(label) => writeln!(f, "   {}: {} venues", label, count)?,
                None => writeln!(f, "   User ID {}: {} venues (user not found)", creator, count)?,
            }
        }

        writeln!(f)?;
        self.fmt_orphans(f)
    }
}

impl VenueReport {
    fn fmt_orphans(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 Checking for venues without creator information...")?;
        let orphans = self.venues_without_creator();
        if orphans.is_empty() {
            return write!(f, "✅ All venues have creator information");
        }
        write!(f, "⚠️  Found {} venues without creator information:", orphans.len())?;
        for venue in orphans {
            write!(
                f,
                "\n   - {} ({})",
                venue.display_or("venueName", "Unknown"),
                venue.display_or("venueId", "Unknown ID")
            )?;
        }
        Ok(())
    }
}
