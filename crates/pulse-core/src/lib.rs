//! # pulse-core
//!
//! Foundation crate for the Pulse monitoring agent.
//! Defines all types, config, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::MonitorConfig;
pub use errors::{PulseError, PulseResult};
pub use models::{
    Alert, AlertLevel, BaselineEntry, HealthStatus, HealthSummary, MetricSample, StatusReport,
};
