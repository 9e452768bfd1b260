//! [`MonitorEngine`] — owns the history, alert log, and baseline map, and
//! runs the analysis checks synchronously on every insertion.

use std::collections::HashMap;

use pulse_core::constants::{ANALYSIS_WINDOW, MIN_ANALYSIS_SAMPLES};
use pulse_core::{Alert, BaselineEntry, HealthSummary, MetricSample, MonitorConfig};

use crate::alerting::AlertManager;
use crate::health::HealthScorer;
use crate::history::HistoryStore;
use crate::{baselines, checks};

/// Central analysis engine. Single writer: all mutation flows through
/// [`MonitorEngine::record`], so the checks never run concurrently with
/// themselves.
#[derive(Debug)]
pub struct MonitorEngine {
    config: MonitorConfig,
    history: HistoryStore,
    alerts: AlertManager,
    baselines: HashMap<String, BaselineEntry>,
}

impl MonitorEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            history: HistoryStore::new(),
            alerts: AlertManager::new(),
            baselines: HashMap::new(),
        }
    }

    /// Append a sample and run the analysis checks over the recent window.
    ///
    /// This is the explicit post-insert hook: analysis is skipped silently
    /// until the history holds at least 10 samples.
    pub fn record(&mut self, sample: MetricSample) {
        self.history.append(sample);
        self.analyze();
    }

    fn analyze(&mut self) {
        if self.history.len() < MIN_ANALYSIS_SAMPLES {
            return;
        }
        let window = self.history.window(ANALYSIS_WINDOW);

        for alert in checks::latency::run(&window, &self.config) {
            self.alerts.add(alert);
        }
        if let Some(alert) = checks::error_rate::run(&window, &self.config) {
            self.alerts.add(alert);
        }
        if let Some(alert) = checks::anomaly::run(&window, &self.config) {
            self.alerts.add(alert);
        }

        // Window snapshot overwrite: endpoints absent from this window keep
        // their previous entry.
        for (endpoint, entry) in baselines::recompute(&window) {
            self.baselines.insert(endpoint, entry);
        }
    }

    /// Composite health assessment over the most recent samples.
    pub fn health_summary(&self) -> HealthSummary {
        HealthScorer::summarize(&self.history, &self.alerts, &self.baselines, &self.config)
    }

    /// Alerts raised within the last `hours`, in insertion order.
    pub fn recent_alerts(&self, hours: i64) -> Vec<Alert> {
        self.alerts.recent(hours)
    }

    /// Discard alerts older than `days`.
    pub fn prune_alerts(&mut self, days: i64) {
        self.alerts.prune(days);
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    pub fn baselines(&self) -> &HashMap<String, BaselineEntry> {
        &self.baselines
    }
}
