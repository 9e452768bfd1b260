//! # pulse-analysis
//!
//! The analysis half of the Pulse monitoring agent: the bounded metric
//! history, the per-insertion analysis checks (latency, error rate,
//! statistical anomaly), per-endpoint baseline snapshots, alert
//! de-duplication and retention, and the composite health scorer.

pub mod alerting;
pub mod baselines;
pub mod checks;
pub mod engine;
pub mod health;
pub mod history;
pub mod stats;
pub mod tracing_setup;

pub use alerting::AlertManager;
pub use engine::MonitorEngine;
pub use health::HealthScorer;
pub use history::HistoryStore;
