//! Per-endpoint baseline snapshots recomputed from the analysis window.
//!
//! Each pass fully overwrites the entry for every endpoint present in the
//! window; this is a window snapshot, not a smoothed running average.

use std::collections::HashMap;

use chrono::Utc;
use pulse_core::{BaselineEntry, MetricSample};

use crate::stats;

/// Compute fresh baseline entries for every endpoint in the window.
pub fn recompute(window: &[MetricSample]) -> HashMap<String, BaselineEntry> {
    let mut by_endpoint: HashMap<&str, Vec<&MetricSample>> = HashMap::new();
    for sample in window {
        by_endpoint.entry(sample.endpoint.as_str()).or_default().push(sample);
    }

    let now = Utc::now();
    by_endpoint
        .into_iter()
        .map(|(endpoint, samples)| {
            let times: Vec<f64> = samples.iter().map(|s| s.response_time).collect();
            let successes = samples.iter().filter(|s| !s.is_error()).count();
            let entry = BaselineEntry {
                avg_response_time: stats::mean(&times),
                median_response_time: stats::median(&times),
                success_rate: successes as f64 / samples.len() as f64,
                last_updated: now,
            };
            (endpoint.to_string(), entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_endpoint() {
        let window = vec![
            MetricSample::new("/wines", 0.2, 200),
            MetricSample::new("/wines", 0.4, 500),
            MetricSample::new("/regions", 1.0, 200),
        ];
        let baselines = recompute(&window);
        assert_eq!(baselines.len(), 2);

        let wines = &baselines["/wines"];
        assert!((wines.avg_response_time - 0.3).abs() < 1e-12);
        assert!((wines.median_response_time - 0.3).abs() < 1e-12);
        assert!((wines.success_rate - 0.5).abs() < 1e-12);

        let regions = &baselines["/regions"];
        assert!((regions.success_rate - 1.0).abs() < 1e-12);
    }
}
