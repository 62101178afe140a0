//! Seeds the local booking API with the sample venues, rooms and events.

use std::process::ExitCode;
use std::time::Duration;

use chrono::Local;
use scheduler_api_client::HttpEntityApi;
use scheduler_common::SchedulerError;
use scheduler_config::AppConfig;
use scheduler_devdata::{cli, populate, sample_catalog, SampleDates, SeedOptions};

fn main() -> ExitCode {
    cli::run("populate-dev-data", run)
}

async fn run(config: AppConfig) -> Result<(), SchedulerError> {
    println!("🚀 Starting development data population...");

    let mut api = HttpEntityApi::new(&config.api)?;
    let catalog = sample_catalog(&SampleDates::from_today(Local::now().date_naive()));
    let options = SeedOptions {
        venue_cleanup_pause: Duration::from_millis(config.dev_data.venue_cleanup_pause_ms),
    };

    let report = populate(&mut api, &config.api.base_url, &catalog, &options).await?;
    println!("\n{}", report);
    Ok(())
}
