use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connection failures carry status code 0.
pub const STATUS_CONNECTION_FAILED: u16 = 0;

/// Timed-out probes carry status code 408 (Request Timeout).
pub const STATUS_TIMEOUT: u16 = 408;

/// One probe result: a single measured request to one endpoint.
///
/// Immutable once created. Transport failures become samples too, with a
/// synthetic status code (0 = connection failure, 408 = timeout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// When the probe completed.
    pub timestamp: DateTime<Utc>,
    /// Endpoint path that was probed.
    pub endpoint: String,
    /// Observed elapsed time in seconds.
    pub response_time: f64,
    /// HTTP status, or a synthetic code for transport failures.
    pub status_code: u16,
    /// 1 for error responses (status >= 400) and transport failures, else 0.
    pub error_count: u32,
    /// Always 1; kept for aggregation symmetry.
    pub request_count: u32,
}

impl MetricSample {
    /// Sample from a completed HTTP exchange with the observed status code.
    pub fn new(endpoint: impl Into<String>, response_time: f64, status_code: u16) -> Self {
        Self {
            timestamp: Utc::now(),
            endpoint: endpoint.into(),
            response_time,
            status_code,
            error_count: u32::from(status_code >= 400),
            request_count: 1,
        }
    }

    /// Synthetic sample for a probe that hit the request timeout.
    pub fn timeout(endpoint: impl Into<String>, response_time: f64) -> Self {
        Self {
            error_count: 1,
            ..Self::new(endpoint, response_time, STATUS_TIMEOUT)
        }
    }

    /// Synthetic sample for a probe that failed before receiving a status.
    pub fn connection_failed(endpoint: impl Into<String>, response_time: f64) -> Self {
        Self {
            error_count: 1,
            ..Self::new(endpoint, response_time, STATUS_CONNECTION_FAILED)
        }
    }

    /// Whether this sample counts toward the window error rate.
    ///
    /// Only real error statuses (>= 400) count; a connection failure
    /// (status 0) is surfaced through `error_count` instead.
    pub fn is_error(&self) -> bool {
        self.status_code >= 400
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_count_follows_status() {
        assert_eq!(MetricSample::new("/wines", 0.2, 200).error_count, 0);
        assert_eq!(MetricSample::new("/wines", 0.2, 500).error_count, 1);
        assert_eq!(MetricSample::timeout("/wines", 10.0).status_code, 408);
        assert_eq!(MetricSample::connection_failed("/wines", 0.01).status_code, 0);
    }

    #[test]
    fn connection_failure_is_not_an_error_status() {
        let sample = MetricSample::connection_failed("/wines", 0.01);
        assert!(!sample.is_error());
        assert_eq!(sample.error_count, 1);
    }
}
