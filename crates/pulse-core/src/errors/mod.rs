//! Error types for the Pulse workspace.
//!
//! Transport failures are deliberately NOT errors: the collector converts
//! them into synthetic failure samples so that the unavailability of the
//! monitored service is itself the signal. The fallible surface is limited
//! to construction-time misconfiguration and serialization.

mod config_error;

pub use config_error::ConfigError;

/// Result alias used across the workspace.
pub type PulseResult<T> = Result<T, PulseError>;

/// Top-level error for the Pulse workspace.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
