//! Value types shared across the workspace.

mod alert;
mod baseline;
mod health;
mod metric_sample;
mod report;

pub use alert::{Alert, AlertLevel};
pub use baseline::BaselineEntry;
pub use health::{HealthStatus, HealthSummary};
pub use metric_sample::MetricSample;
pub use report::StatusReport;
