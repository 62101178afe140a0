//! Deletes every event, room and venue from the local booking API.

use std::process::ExitCode;
use std::time::Duration;

use scheduler_api_client::HttpEntityApi;
use scheduler_common::SchedulerError;
use scheduler_config::AppConfig;
use scheduler_devdata::prompt::{confirm_on_terminal, YES_OR_Y};
use scheduler_devdata::{cli, delete_all_data};

fn main() -> ExitCode {
    cli::run("delete-all", run)
}

async fn run(config: AppConfig) -> Result<(), SchedulerError> {
    println!("⚠️  WARNING: This will delete ALL events, venues, and rooms!");
    if !confirm_on_terminal("Are you sure you want to continue? (yes/no): ", YES_OR_Y).await? {
        return Err(cli::cancelled("Operation cancelled"));
    }

    println!("🧹 Starting complete data cleanup...");
    let api = HttpEntityApi::new(&config.api)?;
    let pause = Duration::from_millis(config.dev_data.delete_pause_ms);

    let report = delete_all_data(&api, &config.api.base_url, pause).await?;
    println!("\n{}", report);
    Ok(())
}
