//! Lists all venues straight from table storage together with their creators.

use std::process::ExitCode;

use scheduler_common::SchedulerError;
use scheduler_config::AppConfig;
use scheduler_devdata::{cli, load_venue_report, ReportTables};
use scheduler_tables::DynamoTableStore;

fn main() -> ExitCode {
    cli::run("list-venues", run)
}

async fn run(config: AppConfig) -> Result<(), SchedulerError> {
    println!("🚀 Starting Venue Listing Script");

    let store = DynamoTableStore::new(&config.table_store)?;
    let tables = ReportTables {
        venues: &config.table_store.venues_table,
        users: &config.table_store.users_table,
    };

    let report = load_venue_report(&store, &tables).await?;
    println!("{}", report);
    println!("\n✅ Script completed successfully");
    Ok(())
}
