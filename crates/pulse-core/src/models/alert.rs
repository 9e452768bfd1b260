use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Alert severity levels, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

/// An alert raised by the analysis engine.
///
/// Immutable once created; the alert log is append-only apart from bulk
/// age-based pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique per creation event.
    pub id: Uuid,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
    /// Severity.
    pub level: AlertLevel,
    /// Short title; alerts with the same title and endpoint de-duplicate.
    pub title: String,
    /// Human-readable description.
    pub description: String,
    /// Endpoint the alert concerns, if endpoint-scoped.
    pub endpoint: Option<String>,
    /// Structured numeric context for consumers.
    pub metrics: Option<serde_json::Value>,
}

impl Alert {
    /// Create a new alert with a fresh id and the timestamp set to now.
    pub fn new(level: AlertLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level,
            title: title.into(),
            description: description.into(),
            endpoint: None,
            metrics: None,
        }
    }

    /// Scope the alert to an endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Attach structured numeric context.
    pub fn with_metrics(mut self, metrics: serde_json::Value) -> Self {
        self.metrics = Some(metrics);
        self
    }
}
