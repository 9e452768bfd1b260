use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::PulseResult;

use super::{Alert, BaselineEntry, HealthSummary};

/// Pull-style status report; the sole surface consumed by dashboards and CLIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    /// Whether the collector run loop is active.
    pub monitoring_active: bool,
    /// Base URL of the monitored service.
    pub base_url: String,
    /// Endpoint paths probed each cycle.
    pub endpoints: Vec<String>,
    /// Seconds between probe cycles.
    pub check_interval_secs: u64,
    /// Composite health assessment.
    pub health: HealthSummary,
    /// Alerts from the last 24 hours, in insertion order.
    pub recent_alerts: Vec<Alert>,
    /// Samples currently held in history.
    pub total_samples: usize,
    /// Per-endpoint baseline snapshot.
    pub baselines: HashMap<String, BaselineEntry>,
}

impl StatusReport {
    /// Serialize the report for transport to external consumers.
    pub fn to_json(&self) -> PulseResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
