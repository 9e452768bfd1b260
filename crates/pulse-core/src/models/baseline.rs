use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last-computed summary statistics for one endpoint.
///
/// Fully overwritten on each analysis pass from the current window; this is
/// a window snapshot, not a smoothed running average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    /// Mean response time over the window (seconds).
    pub avg_response_time: f64,
    /// Median response time over the window (seconds).
    pub median_response_time: f64,
    /// Fraction of window samples with status < 400.
    pub success_rate: f64,
    /// When this entry was last recomputed.
    pub last_updated: DateTime<Utc>,
}
