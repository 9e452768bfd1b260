//! The independent window checks run on every insertion: latency, error
//! rate, and statistical anomaly. Each is a pure function over the analysis
//! window producing alert values; the engine feeds them to the alert log.

pub mod anomaly;
pub mod error_rate;
pub mod latency;
