// --- File: crates/scheduler_devdata/src/cli.rs ---
//! Shared entry point of the dev-data binaries.

use std::future::Future;
use std::process::ExitCode;

use scheduler_common::{log_error, logging, SchedulerError};
use scheduler_config::{load_config, AppConfig};
use tracing::info;

/// Initializes logging and configuration, then runs `script` on a
/// current-thread runtime until it finishes or Ctrl-C arrives.
///
/// Exit status is 0 on success or a declined prompt, 1 otherwise.
pub fn run<F, Fut>(name: &str, script: F) -> ExitCode
where
    F: FnOnce(AppConfig) -> Fut,
    Fut: Future<Output = Result<(), SchedulerError>>,
{
    logging::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log_error(&e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            log_error(&e, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };

    let outcome = runtime.block_on(async {
        tokio::select! {
            result = script(config) => result,
            _ = tokio::signal::ctrl_c() => Err(SchedulerError::InterruptedError),
        }
    });
    // a prompt may still be blocked on stdin after an interrupt
    runtime.shutdown_background();

    match outcome {
        Ok(()) => {
            info!("{} finished", name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            match &e {
                SchedulerError::CancelledError(message) => println!("❌ {}", message),
                SchedulerError::InterruptedError => println!("\n\n⚠️  Operation cancelled by user"),
                _ => log_error(&e, name),
            }
            ExitCode::from(e.exit_status())
        }
    }
}

/// The error a declined confirmation prompt ends a script with.
pub fn cancelled(message: &str) -> SchedulerError {
    SchedulerError::CancelledError(message.to_string())
}
