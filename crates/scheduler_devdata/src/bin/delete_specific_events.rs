//! Deletes the given events directly from the events table.
//!
//! Usage: `delete-specific-events [EVENT_ID...]`. Without arguments the ids
//! come from `dev_data.purge_event_ids`. A leading `.env*` argument selects
//! the dotenv file and is not an id.

use std::process::ExitCode;

use scheduler_common::SchedulerError;
use scheduler_config::AppConfig;
use scheduler_devdata::prompt::{confirm_on_terminal, YES_ONLY};
use scheduler_devdata::purge::requested_event_ids;
use scheduler_devdata::{cli, list_events, purge_events, DevDataError};
use scheduler_tables::DynamoTableStore;

fn main() -> ExitCode {
    cli::run("delete-specific-events", run)
}

async fn show_events(store: &DynamoTableStore, table: &str) {
    match list_events(store, table).await {
        Ok(listing) => println!("{}", listing),
        Err(e) => println!("Error listing events: {}", e),
    }
}

async fn run(config: AppConfig) -> Result<(), SchedulerError> {
    let event_ids = requested_event_ids(std::env::args().skip(1), &config.dev_data.purge_event_ids);
    if event_ids.is_empty() {
        return Err(DevDataError::NoEventIds.into());
    }

    let rule = "=".repeat(50);
    println!("🎯 Event Deletion Script\n{}", rule);

    let store = DynamoTableStore::new(&config.table_store)?;
    let table = config.table_store.events_table.as_str();

    println!("📋 Current events before deletion:\n{}", rule);
    show_events(&store, table).await;

    println!("\n⚠️  About to delete {} events:", event_ids.len());
    for event_id in &event_ids {
        println!("   - {}", event_id);
    }
    if !confirm_on_terminal("\n❓ Are you sure you want to proceed? (yes/no): ", YES_ONLY).await? {
        return Err(cli::cancelled("Deletion cancelled."));
    }

    println!("\n🗑️  Deleting {} events...\n{}", event_ids.len(), rule);
    let report = purge_events(&store, table, &event_ids).await;
    println!("{}", report);

    println!("\n📋 Events after deletion:\n{}", rule);
    show_events(&store, table).await;
    Ok(())
}
