// Single source of truth for all default values.

// --- Probing ---
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default endpoint paths probed each cycle.
pub fn default_endpoints() -> Vec<String> {
    vec![
        "/".to_string(),
        "/health".to_string(),
        "/regions".to_string(),
        "/wines".to_string(),
        "/search/wines".to_string(),
    ]
}

// --- Analysis thresholds ---
pub const DEFAULT_RESPONSE_TIME_THRESHOLD_SECS: f64 = 2.0;
pub const DEFAULT_ERROR_RATE_THRESHOLD: f64 = 0.05;
pub const DEFAULT_ANOMALY_SENSITIVITY: f64 = 2.0;

// --- Alert retention ---
pub const DEFAULT_ALERT_RETENTION_DAYS: i64 = 7;
