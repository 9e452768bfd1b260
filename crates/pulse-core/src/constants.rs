/// Pulse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of samples retained in the metric history (FIFO eviction).
pub const HISTORY_CAPACITY: usize = 1000;

/// Minimum history size before any analysis runs.
pub const MIN_ANALYSIS_SAMPLES: usize = 10;

/// Number of recent samples fed to each analysis pass.
pub const ANALYSIS_WINDOW: usize = 50;

/// Number of recent samples considered by the health scorer.
pub const HEALTH_WINDOW: usize = 100;

/// Minimum window size for the statistical anomaly check.
pub const MIN_ANOMALY_SAMPLES: usize = 20;

/// Slow samples per endpoint required before a latency alert fires.
pub const SLOW_SAMPLE_ALERT_COUNT: usize = 3;

/// Error rate above which an error-rate alert escalates to critical.
pub const CRITICAL_ERROR_RATE: f64 = 0.10;

/// Window during which a repeat alert of the same title and endpoint is suppressed.
pub const ALERT_DEDUP_WINDOW_SECS: i64 = 300;

/// Total alert count above which the health score is penalized.
pub const ALERT_BACKLOG_LIMIT: usize = 5;

/// Alert window included in the pull-style status report.
pub const STATUS_REPORT_ALERT_HOURS: i64 = 24;
