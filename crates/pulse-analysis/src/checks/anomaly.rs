//! Anomaly check: z-score outliers in window response times → warning.

use pulse_core::constants::MIN_ANOMALY_SAMPLES;
use pulse_core::{Alert, AlertLevel, MetricSample, MonitorConfig};

use crate::stats;

/// Title carried by anomaly alerts; part of the de-duplication key.
pub const TITLE: &str = "Response Time Anomalies Detected";

/// Flag statistical outliers in the window's response times.
///
/// Requires at least 20 samples. With zero variance every sample is
/// considered normal, so a flat window never alerts.
pub fn run(window: &[MetricSample], config: &MonitorConfig) -> Option<Alert> {
    if window.len() < MIN_ANOMALY_SAMPLES {
        return None;
    }

    let times: Vec<f64> = window.iter().map(|s| s.response_time).collect();
    let mean = stats::mean(&times);
    let stdev = stats::sample_stdev(&times);

    if stdev <= 0.0 {
        return None;
    }

    let outliers = window
        .iter()
        .filter(|s| (s.response_time - mean).abs() / stdev > config.anomaly_sensitivity)
        .count();

    if outliers == 0 {
        return None;
    }

    let description = format!(
        "Found {outliers} anomalous response times. Mean: {mean:.2}s, StdDev: {stdev:.2}s"
    );
    Some(
        Alert::new(AlertLevel::Warning, TITLE, description).with_metrics(serde_json::json!({
            "outlier_count": outliers,
            "mean_response_time": mean,
            "std_deviation": stdev,
        })),
    )
}
