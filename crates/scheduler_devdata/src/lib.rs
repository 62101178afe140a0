// --- File: crates/scheduler_devdata/src/lib.rs ---
//! Developer tooling around the booking system: seed the sample catalog,
//! wipe everything, list venues with their creators and purge single events.

pub mod catalog;
pub mod cleanup;
pub mod cli;
pub mod dates;
pub mod error;
pub mod prompt;
pub mod purge;
pub mod report;
pub mod seed;

pub use catalog::{sample_catalog, Catalog, VenueSpec};
pub use cleanup::{delete_all_data, CleanupReport};
pub use dates::SampleDates;
pub use error::DevDataError;
pub use purge::{list_events, purge_events, PurgeReport};
pub use report::{load_venue_report, ReportTables, VenueReport};
pub use seed::{populate, SeedOptions, SeedReport};
