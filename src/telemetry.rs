use tracing_subscriber::EnvFilter;

use crate::Error;

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod telemetry_tests;

/// Installs a global `tracing` subscriber that writes formatted events to stdout.
///
/// The `RUST_LOG` environment variable selects the events that are written. When it is not
/// set, or cannot be parsed, `default_filter` is used instead, e.g. `"info"` or
/// `"robot_control_core=debug"`.
///
/// ## Errors
///
/// * [Error::FailedToInitializeLogging] - Returned when a global subscriber is already installed
#[cfg_attr(test, mutants::skip)] // Cannot easily check mutations as this installs a process wide subscriber
pub fn init_tracing(default_filter: &str) -> Result<(), Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::FailedToInitializeLogging {
            reason: e.to_string(),
        })
}
