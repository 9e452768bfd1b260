//! Tracing setup and structured event helpers for the monitoring agent.

pub mod events;

use tracing_subscriber::EnvFilter;

/// Environment variable controlling the log filter (e.g. `PULSE_LOG=debug`).
pub const LOG_ENV_VAR: &str = "PULSE_LOG";

/// Install the global tracing subscriber.
///
/// Output is compact single-line text, matching the log format operators
/// tail during an incident. Idempotent: later calls (including from tests
/// that run in one process) are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
