//! Error-rate check: window error rate over threshold → warning, over 10% → critical.

use std::collections::HashMap;

use pulse_core::constants::CRITICAL_ERROR_RATE;
use pulse_core::{Alert, AlertLevel, MetricSample, MonitorConfig};

/// Title carried by error-rate alerts; part of the de-duplication key.
pub const TITLE: &str = "High Error Rate Detected";

/// Evaluate the window error rate against the configured threshold.
pub fn run(window: &[MetricSample], config: &MonitorConfig) -> Option<Alert> {
    if window.is_empty() {
        return None;
    }
    let total = window.len();
    let errors: Vec<&MetricSample> = window.iter().filter(|s| s.is_error()).collect();
    let error_rate = errors.len() as f64 / total as f64;

    if error_rate <= config.error_rate_threshold {
        return None;
    }

    let mut error_endpoints: HashMap<&str, usize> = HashMap::new();
    for sample in &errors {
        *error_endpoints.entry(sample.endpoint.as_str()).or_default() += 1;
    }

    let level = if error_rate > CRITICAL_ERROR_RATE {
        AlertLevel::Critical
    } else {
        AlertLevel::Warning
    };
    let description = format!(
        "Error rate is {:.1}% (threshold: {:.1}%). Total errors: {}/{}",
        error_rate * 100.0,
        config.error_rate_threshold * 100.0,
        errors.len(),
        total
    );
    Some(Alert::new(level, TITLE, description).with_metrics(serde_json::json!({
        "error_rate": error_rate,
        "error_endpoints": error_endpoints,
    })))
}
