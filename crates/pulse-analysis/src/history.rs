//! Bounded, insertion-ordered sample history feeding all analysis.

use std::collections::VecDeque;

use pulse_core::constants::HISTORY_CAPACITY;
use pulse_core::MetricSample;

/// FIFO-capped buffer of probe samples. Single writer, multiple readers.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    samples: VecDeque<MetricSample>,
    /// Maximum samples to retain; oldest evicted first.
    capacity: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create with a custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest once at capacity.
    pub fn append(&mut self, sample: MetricSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// The most recent `n` samples in original insertion order.
    pub fn window(&self, n: usize) -> Vec<MetricSample> {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).cloned().collect()
    }

    /// Iterate all retained samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &MetricSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut history = HistoryStore::with_capacity(3);
        for i in 0..5 {
            history.append(MetricSample::new(format!("/ep{i}"), 0.1, 200));
        }
        assert_eq!(history.len(), 3);
        let endpoints: Vec<&str> = history.iter().map(|s| s.endpoint.as_str()).collect();
        assert_eq!(endpoints, vec!["/ep2", "/ep3", "/ep4"]);
    }

    #[test]
    fn window_keeps_insertion_order() {
        let mut history = HistoryStore::new();
        for i in 0..10 {
            history.append(MetricSample::new("/wines", i as f64, 200));
        }
        let window = history.window(4);
        let times: Vec<f64> = window.iter().map(|s| s.response_time).collect();
        assert_eq!(times, vec![6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn window_larger_than_history_returns_all() {
        let mut history = HistoryStore::new();
        history.append(MetricSample::new("/", 0.1, 200));
        assert_eq!(history.window(50).len(), 1);
    }
}
