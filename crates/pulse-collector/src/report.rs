//! Pull-style status report assembly.

use std::sync::atomic::Ordering;

use pulse_core::constants::STATUS_REPORT_ALERT_HOURS;
use pulse_core::StatusReport;

use crate::Collector;

impl Collector {
    /// Snapshot the current monitoring state for external consumers.
    ///
    /// Reads consistently under the read lock and returns owned data; the
    /// caller never observes structures being mutated by a live cycle.
    pub async fn status_report(&self) -> StatusReport {
        let engine = self.engine.read().await;
        StatusReport {
            monitoring_active: self.active.load(Ordering::SeqCst),
            base_url: self.base_url.clone(),
            endpoints: self.config.endpoints.clone(),
            check_interval_secs: self.config.check_interval_secs,
            health: engine.health_summary(),
            recent_alerts: engine.recent_alerts(STATUS_REPORT_ALERT_HOURS),
            total_samples: engine.history().len(),
            baselines: engine.baselines().clone(),
        }
    }

    /// Run a single probe cycle and report, without entering the run loop.
    pub async fn check_once(&self) -> StatusReport {
        self.run_cycle().await;
        self.status_report().await
    }
}
