//! Composite health scoring over the most recent samples.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use pulse_core::constants::{ALERT_BACKLOG_LIMIT, HEALTH_WINDOW, MIN_ANOMALY_SAMPLES};
use pulse_core::{BaselineEntry, HealthStatus, HealthSummary, MetricSample, MonitorConfig};

use crate::alerting::AlertManager;
use crate::history::HistoryStore;
use crate::stats;

/// Derives a composite status, score, and insight list on demand.
///
/// Pull-only; holds no state of its own.
pub struct HealthScorer;

impl HealthScorer {
    /// Score the most recent 100 samples against the configured thresholds.
    pub fn summarize(
        history: &HistoryStore,
        alerts: &AlertManager,
        baselines: &HashMap<String, BaselineEntry>,
        config: &MonitorConfig,
    ) -> HealthSummary {
        if history.is_empty() {
            return HealthSummary::no_data();
        }

        let window = history.window(HEALTH_WINDOW);
        let total_requests = window.len();
        let error_requests = window.iter().filter(|s| s.is_error()).count();
        let error_rate = error_requests as f64 / total_requests as f64;
        let times: Vec<f64> = window.iter().map(|s| s.response_time).collect();
        let avg_response_time = stats::mean(&times);

        let mut score: i32 = 100;
        let mut issues = Vec::new();

        if avg_response_time > config.response_time_threshold {
            score -= 20;
            issues.push("Slow response times".to_string());
        }
        if error_rate > config.error_rate_threshold {
            score -= 30;
            issues.push("High error rate".to_string());
        }
        if alerts.len() > ALERT_BACKLOG_LIMIT {
            score -= 15;
            issues.push("Multiple active alerts".to_string());
        }
        let health_score = score.max(0) as u32;

        let status = if health_score >= 80 {
            HealthStatus::Healthy
        } else if health_score >= 60 {
            HealthStatus::Degraded
        } else {
            HealthStatus::Critical
        };

        HealthSummary {
            status,
            health_score,
            total_requests,
            error_rate,
            avg_response_time,
            active_alerts: alerts.count_recent_secs(3600),
            issues,
            insights: generate_insights(&window),
            baselines: baselines.clone(),
        }
    }
}

/// Free-text observations about the window, regenerated on every call.
fn generate_insights(window: &[MetricSample]) -> Vec<String> {
    let mut insights = Vec::new();
    if window.is_empty() {
        return insights;
    }

    // Best and worst performing endpoints by mean response time.
    let mut by_endpoint: HashMap<&str, Vec<f64>> = HashMap::new();
    for sample in window {
        by_endpoint
            .entry(sample.endpoint.as_str())
            .or_default()
            .push(sample.response_time);
    }
    let endpoint_avgs: Vec<(&str, f64)> = by_endpoint
        .iter()
        .map(|(endpoint, times)| (*endpoint, stats::mean(times)))
        .collect();
    if let Some((endpoint, avg)) = endpoint_avgs
        .iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
    {
        insights.push(format!("Best performing endpoint: {endpoint} ({avg:.2}s avg)"));
    }
    if let Some((endpoint, avg)) = endpoint_avgs
        .iter()
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        insights.push(format!("Slowest endpoint: {endpoint} ({avg:.2}s avg)"));
    }

    // Activity concentration in the last hour.
    let hour_ago = Utc::now() - Duration::hours(1);
    let recent = window.iter().filter(|s| s.timestamp > hour_ago).count();
    if recent as f64 >= window.len() as f64 * 0.8 {
        insights.push("High activity detected in the last hour".to_string());
    }

    // Trend: compare the window's first half to its second half.
    if window.len() >= MIN_ANOMALY_SAMPLES {
        let mid = window.len() / 2;
        let first: Vec<f64> = window[..mid].iter().map(|s| s.response_time).collect();
        let second: Vec<f64> = window[mid..].iter().map(|s| s.response_time).collect();
        let first_avg = stats::mean(&first);
        let second_avg = stats::mean(&second);

        if second_avg > first_avg * 1.2 {
            insights.push("Response times are trending upward".to_string());
        } else if second_avg < first_avg * 0.8 {
            insights.push("Response times are improving".to_string());
        }
    }

    insights
}
