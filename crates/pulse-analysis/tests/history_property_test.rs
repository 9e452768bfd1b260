//! Property tests for the bounded history invariant.

use proptest::prelude::*;
use pulse_analysis::HistoryStore;
use pulse_core::constants::HISTORY_CAPACITY;
use pulse_core::MetricSample;

proptest! {
    // The cap holds for any insertion count, and the survivors are the most
    // recent samples in their original relative order.
    #[test]
    fn capacity_and_order_invariants(count in 0usize..2048) {
        let mut history = HistoryStore::new();
        for i in 0..count {
            history.append(MetricSample::new("/wines", i as f64, 200));
        }

        prop_assert!(history.len() <= HISTORY_CAPACITY);
        prop_assert_eq!(history.len(), count.min(HISTORY_CAPACITY));

        let times: Vec<f64> = history.iter().map(|s| s.response_time).collect();
        prop_assert!(times.windows(2).all(|w| w[0] < w[1]));
        if count > 0 {
            prop_assert_eq!(times[times.len() - 1], (count - 1) as f64);
        }
    }

    // Windows never exceed the requested size and always come from the tail.
    #[test]
    fn window_is_a_tail_slice(count in 0usize..200, n in 1usize..100) {
        let mut history = HistoryStore::new();
        for i in 0..count {
            history.append(MetricSample::new("/wines", i as f64, 200));
        }

        let window = history.window(n);
        prop_assert_eq!(window.len(), n.min(count));
        if let Some(last) = window.last() {
            prop_assert_eq!(last.response_time, (count - 1) as f64);
        }
    }
}
