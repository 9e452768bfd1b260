use serde::{Deserialize, Serialize};

use super::defaults;

/// Monitoring agent configuration.
///
/// Supplied to each component at construction; there is no ambient global.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Base URL of the monitored service.
    pub base_url: String,
    /// Endpoint paths probed each cycle, relative to `base_url`.
    pub endpoints: Vec<String>,
    /// Seconds of idle time between probe cycles.
    pub check_interval_secs: u64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Response time (seconds) above which a sample counts as slow.
    pub response_time_threshold: f64,
    /// Window error rate above which an error-rate alert fires.
    pub error_rate_threshold: f64,
    /// Z-score above which a response time counts as an outlier.
    pub anomaly_sensitivity: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            endpoints: defaults::default_endpoints(),
            check_interval_secs: defaults::DEFAULT_CHECK_INTERVAL_SECS,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            response_time_threshold: defaults::DEFAULT_RESPONSE_TIME_THRESHOLD_SECS,
            error_rate_threshold: defaults::DEFAULT_ERROR_RATE_THRESHOLD,
            anomaly_sensitivity: defaults::DEFAULT_ANOMALY_SENSITIVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MonitorConfig::default();
        assert_eq!(config.check_interval_secs, 30);
        assert_eq!(config.timeout_secs, 10);
        assert!((config.response_time_threshold - 2.0).abs() < f64::EPSILON);
        assert!((config.error_rate_threshold - 0.05).abs() < f64::EPSILON);
        assert!((config.anomaly_sensitivity - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_endpoint_set_covers_every_service_path() {
        let config = MonitorConfig::default();
        let expected = ["/", "/health", "/regions", "/wines", "/search/wines"];
        assert_eq!(config.endpoints.len(), expected.len());
        for path in expected {
            assert!(
                config.endpoints.iter().any(|e| e == path),
                "default endpoints missing {path:?}: {:?}",
                config.endpoints
            );
        }
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: MonitorConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.1:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.1:9000");
        assert_eq!(config.check_interval_secs, 30);
    }
}
