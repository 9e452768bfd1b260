//! Latency check: an endpoint with >=3 slow samples in the window → warning.

use std::collections::HashMap;

use pulse_core::constants::SLOW_SAMPLE_ALERT_COUNT;
use pulse_core::{Alert, AlertLevel, MetricSample, MonitorConfig};

use crate::stats;

/// Title carried by latency alerts; part of the de-duplication key.
pub const TITLE: &str = "Slow Response Times Detected";

/// Evaluate the window, producing one alert per offending endpoint.
pub fn run(window: &[MetricSample], config: &MonitorConfig) -> Vec<Alert> {
    let times: Vec<f64> = window.iter().map(|s| s.response_time).collect();
    let avg_response_time = stats::mean(&times);

    let mut slow_counts: HashMap<&str, usize> = HashMap::new();
    for sample in window {
        if sample.response_time > config.response_time_threshold {
            *slow_counts.entry(sample.endpoint.as_str()).or_default() += 1;
        }
    }

    let mut alerts = Vec::new();
    for (endpoint, count) in slow_counts {
        if count < SLOW_SAMPLE_ALERT_COUNT {
            continue;
        }
        let description = format!(
            "Endpoint {endpoint} has {count} slow responses (>{:.1}s) in recent measurements. \
             Average response time: {avg_response_time:.2}s",
            config.response_time_threshold
        );
        alerts.push(
            Alert::new(AlertLevel::Warning, TITLE, description)
                .with_endpoint(endpoint)
                .with_metrics(serde_json::json!({
                    "avg_response_time": avg_response_time,
                    "slow_count": count,
                })),
        );
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_with_slow(slow: usize) -> Vec<MetricSample> {
        let mut window: Vec<MetricSample> = (0..20)
            .map(|_| MetricSample::new("/wines", 0.3, 200))
            .collect();
        window.extend((0..slow).map(|_| MetricSample::new("/wines", 3.5, 200)));
        window
    }

    #[test]
    fn two_slow_samples_do_not_alert() {
        let alerts = run(&window_with_slow(2), &MonitorConfig::default());
        assert!(alerts.is_empty());
    }

    #[test]
    fn three_slow_samples_alert_once_for_the_endpoint() {
        let alerts = run(&window_with_slow(3), &MonitorConfig::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, TITLE);
        assert_eq!(alerts[0].level, AlertLevel::Warning);
        assert_eq!(alerts[0].endpoint.as_deref(), Some("/wines"));
    }
}
