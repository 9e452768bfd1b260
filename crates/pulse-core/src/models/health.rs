use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::BaselineEntry;

/// Composite health status derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Critical,
    /// Sentinel returned while no samples have been collected yet.
    NoData,
}

/// Composite health assessment over the most recent samples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthSummary {
    pub status: HealthStatus,
    /// 0-100; deductions only, floored at 0.
    pub health_score: u32,
    /// Samples in the scoring window.
    pub total_requests: usize,
    /// Fraction of window samples with status >= 400.
    pub error_rate: f64,
    /// Mean response time over the window (seconds).
    pub avg_response_time: f64,
    /// Alerts raised within the last hour.
    pub active_alerts: usize,
    /// Detected issues, one entry per score deduction.
    pub issues: Vec<String>,
    /// Free-text observations, regenerated on every call.
    pub insights: Vec<String>,
    /// Per-endpoint baseline snapshot.
    pub baselines: HashMap<String, BaselineEntry>,
}

impl HealthSummary {
    /// Sentinel summary for an empty history.
    pub fn no_data() -> Self {
        Self {
            status: HealthStatus::NoData,
            health_score: 0,
            total_requests: 0,
            error_rate: 0.0,
            avg_response_time: 0.0,
            active_alerts: 0,
            issues: Vec::new(),
            insights: Vec::new(),
            baselines: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_serializes_snake_case() {
        let summary = HealthSummary::no_data();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "no_data");
    }
}
