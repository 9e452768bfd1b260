//! Alert manager tests: de-duplication, time-bounded queries, pruning.

use chrono::{Duration, Utc};
use pulse_analysis::{tracing_setup, AlertManager};
use pulse_core::{Alert, AlertLevel};

fn alert(title: &str, endpoint: Option<&str>) -> Alert {
    let alert = Alert::new(AlertLevel::Warning, title, "test alert");
    match endpoint {
        Some(endpoint) => alert.with_endpoint(endpoint),
        None => alert,
    }
}

// ---------------------------------------------------------------------------
// De-duplication
// ---------------------------------------------------------------------------

#[test]
fn duplicate_title_and_endpoint_is_dropped() {
    tracing_setup::init_tracing();
    let mut manager = AlertManager::new();
    assert!(manager.add(alert("Slow Response Times Detected", Some("/wines"))));
    assert!(!manager.add(alert("Slow Response Times Detected", Some("/wines"))));
    assert_eq!(manager.len(), 1);
}

#[test]
fn same_title_different_endpoint_is_kept() {
    let mut manager = AlertManager::new();
    manager.add(alert("Slow Response Times Detected", Some("/wines")));
    manager.add(alert("Slow Response Times Detected", Some("/regions")));
    assert_eq!(manager.len(), 2);
}

#[test]
fn endpoint_less_alerts_de_duplicate_too() {
    let mut manager = AlertManager::new();
    assert!(manager.add(alert("High Error Rate Detected", None)));
    assert!(!manager.add(alert("High Error Rate Detected", None)));
    assert_eq!(manager.len(), 1);
}

#[test]
fn duplicate_outside_the_window_is_kept() {
    let mut manager = AlertManager::new();
    let mut old = alert("High Error Rate Detected", None);
    old.timestamp = Utc::now() - Duration::seconds(301);
    manager.add(old);

    assert!(manager.add(alert("High Error Rate Detected", None)));
    assert_eq!(manager.len(), 2);
}

// ---------------------------------------------------------------------------
// Time-bounded queries
// ---------------------------------------------------------------------------

#[test]
fn recent_respects_the_hour_cutoff() {
    let mut manager = AlertManager::new();
    let mut old = alert("High Error Rate Detected", None);
    old.timestamp = Utc::now() - Duration::hours(25);
    manager.add(old);
    manager.add(alert("Slow Response Times Detected", Some("/wines")));

    assert_eq!(manager.recent(24).len(), 1);
    assert_eq!(manager.recent(48).len(), 2);
}

#[test]
fn recent_preserves_insertion_order() {
    let mut manager = AlertManager::new();
    manager.add(alert("first", None));
    manager.add(alert("second", None));
    manager.add(alert("third", None));

    let recent = manager.recent(1);
    let titles: Vec<&str> = recent.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Pruning
// ---------------------------------------------------------------------------

#[test]
fn prune_discards_only_old_alerts() {
    let mut manager = AlertManager::new();
    let mut stale = alert("stale", None);
    stale.timestamp = Utc::now() - Duration::days(8);
    manager.add(stale);
    manager.add(alert("fresh", None));

    manager.prune(7);
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.alerts()[0].title, "fresh");
}

#[test]
fn prune_expired_applies_the_seven_day_retention() {
    let mut manager = AlertManager::new();
    let mut expired = alert("expired", None);
    expired.timestamp = Utc::now() - Duration::days(8);
    manager.add(expired);
    let mut retained = alert("retained", None);
    retained.timestamp = Utc::now() - Duration::days(6);
    manager.add(retained);

    manager.prune_expired();
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.alerts()[0].title, "retained");
}
