//! Alert log with de-duplication and time-bounded queries.

use chrono::{Duration, Utc};
use pulse_core::config::defaults::DEFAULT_ALERT_RETENTION_DAYS;
use pulse_core::constants::ALERT_DEDUP_WINDOW_SECS;
use pulse_core::Alert;

use crate::tracing_setup::events;

/// Append-only alert log. Growth is unbounded unless [`AlertManager::prune`]
/// is invoked by an external scheduler.
#[derive(Debug, Clone, Default)]
pub struct AlertManager {
    alerts: Vec<Alert>,
}

impl AlertManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an alert unless a duplicate was raised recently.
    ///
    /// A duplicate has the same title and the same endpoint (including both
    /// being endpoint-less) within the last 300 seconds. Duplicates are
    /// dropped silently; returns whether the alert was stored.
    pub fn add(&mut self, alert: Alert) -> bool {
        let cutoff = Utc::now() - Duration::seconds(ALERT_DEDUP_WINDOW_SECS);
        let duplicate = self.alerts.iter().any(|a| {
            a.timestamp > cutoff && a.title == alert.title && a.endpoint == alert.endpoint
        });
        if duplicate {
            events::alert_suppressed(&alert.title, alert.endpoint.as_deref());
            return false;
        }
        events::alert_raised(alert.level, &alert.title, alert.endpoint.as_deref());
        self.alerts.push(alert);
        true
    }

    /// Alerts raised within the last `hours`, in original insertion order.
    pub fn recent(&self, hours: i64) -> Vec<Alert> {
        let cutoff = Utc::now() - Duration::hours(hours);
        self.alerts
            .iter()
            .filter(|a| a.timestamp > cutoff)
            .cloned()
            .collect()
    }

    /// Number of alerts raised within the last `secs`.
    pub fn count_recent_secs(&self, secs: i64) -> usize {
        let cutoff = Utc::now() - Duration::seconds(secs);
        self.alerts.iter().filter(|a| a.timestamp > cutoff).count()
    }

    /// Discard alerts older than `days`. Intended to be driven by an
    /// external scheduler, not called automatically.
    pub fn prune(&mut self, days: i64) {
        let cutoff = Utc::now() - Duration::days(days);
        self.alerts.retain(|a| a.timestamp > cutoff);
    }

    /// [`AlertManager::prune`] with the default retention period.
    pub fn prune_expired(&mut self) {
        self.prune(DEFAULT_ALERT_RETENTION_DAYS);
    }

    /// All retained alerts, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
