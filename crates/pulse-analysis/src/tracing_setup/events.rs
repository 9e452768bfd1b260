//! Structured log events for key monitoring operations.
//!
//! Each function emits a `tracing` event with structured fields.

use pulse_core::AlertLevel;

/// Log a completed probe.
pub fn probe_completed(endpoint: &str, status_code: u16, elapsed_secs: f64) {
    tracing::debug!(
        event = "probe_completed",
        endpoint = %endpoint,
        status_code = status_code,
        elapsed_secs = elapsed_secs,
        "probe completed"
    );
}

/// Log a probe that hit the request timeout.
pub fn probe_timeout(endpoint: &str, elapsed_secs: f64) {
    tracing::warn!(
        event = "probe_timeout",
        endpoint = %endpoint,
        elapsed_secs = elapsed_secs,
        "probe timed out"
    );
}

/// Log a probe that failed before receiving a status.
pub fn probe_failed(endpoint: &str, reason: &str) {
    tracing::error!(
        event = "probe_failed",
        endpoint = %endpoint,
        reason = %reason,
        "probe failed"
    );
}

/// Log a newly raised alert.
pub fn alert_raised(level: AlertLevel, title: &str, endpoint: Option<&str>) {
    tracing::warn!(
        event = "alert_raised",
        level = ?level,
        title = %title,
        endpoint = ?endpoint,
        "alert raised"
    );
}

/// Log an alert suppressed by de-duplication.
pub fn alert_suppressed(title: &str, endpoint: Option<&str>) {
    tracing::debug!(
        event = "alert_suppressed",
        title = %title,
        endpoint = ?endpoint,
        "duplicate alert suppressed"
    );
}

/// Log monitor start.
pub fn monitor_started(base_url: &str, endpoint_count: usize) {
    tracing::info!(
        event = "monitor_started",
        base_url = %base_url,
        endpoint_count = endpoint_count,
        "monitoring started"
    );
}

/// Log monitor stop.
pub fn monitor_stopped(total_samples: usize) {
    tracing::info!(
        event = "monitor_stopped",
        total_samples = total_samples,
        "monitoring stopped"
    );
}
