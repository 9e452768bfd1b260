//! # pulse-collector
//!
//! The collection half of the Pulse monitoring agent: a concurrent HTTP
//! endpoint poller with a bounded per-request timeout, a cooperative run
//! loop, and the pull-style status report consumed by dashboards and CLIs.
//!
//! Probe failures never propagate: timeouts and connection errors become
//! synthetic failure samples, since the unavailability of the monitored
//! service is itself the signal.

pub mod collector;
pub mod report;

pub use collector::Collector;
