//! Retraining cadence and new-fault detection against the SQLite store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use frostline_core::config::LearningConfig;
use frostline_core::models::{Prediction, Sensor, SensorReadings};
use frostline_core::traits::ILearningStore;
use frostline_learning::LearningTracker;
use frostline_storage::StorageEngine;
use test_fixtures::nominal_readings;

fn make_tracker(retraining_threshold: u64, new_fault_threshold: u64) -> LearningTracker {
    let store: Arc<dyn ILearningStore> = Arc::new(StorageEngine::open_in_memory().unwrap());
    LearningTracker::new(
        store,
        LearningConfig {
            retraining_threshold,
            new_fault_threshold,
        },
    )
}

fn fault(label: &str, score: f64) -> Prediction {
    Prediction {
        fault: Some(label.to_string()),
        score,
        dominant_variable: None,
        error: None,
    }
}

#[test]
fn healthy_diagnostic_only_bumps_total() {
    let tracker = make_tracker(1000, 50);
    let outcome = tracker
        .record(&Prediction::default(), &nominal_readings(), Utc::now())
        .unwrap();

    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.fault, None);
    assert!(!outcome.retraining_required);
    assert!(outcome.new_fault.is_none());
    assert!(tracker.summary().unwrap().fault_counts.is_empty());
}

#[test]
fn blank_fault_label_counts_as_healthy() {
    let tracker = make_tracker(1000, 1);
    let outcome = tracker
        .record(&fault("   ", 80.0), &nominal_readings(), Utc::now())
        .unwrap();
    assert_eq!(outcome.fault, None);
    assert!(outcome.new_fault.is_none());
}

#[test]
fn retraining_fires_on_every_multiple() {
    let tracker = make_tracker(3, 50);
    let now = Utc::now();
    let flags: Vec<bool> = (0..7)
        .map(|_| {
            tracker
                .record(&Prediction::default(), &nominal_readings(), now)
                .unwrap()
                .retraining_required
        })
        .collect();
    assert_eq!(flags, vec![false, false, true, false, false, true, false]);

    let summary = tracker.summary().unwrap();
    assert_eq!(summary.total, 7);
    assert_eq!(summary.next_retraining_at, 9);
    assert_eq!(summary.last_retraining.unwrap().total, 6);
}

#[test]
fn retraining_reports_most_frequent_fault() {
    let tracker = make_tracker(4, 50);
    let readings = nominal_readings();
    let now = Utc::now();
    tracker.record(&fault("fan_failure", 70.0), &readings, now).unwrap();
    tracker.record(&fault("refrigerant_leak", 70.0), &readings, now).unwrap();
    tracker.record(&fault("refrigerant_leak", 70.0), &readings, now).unwrap();
    let outcome = tracker
        .record(&Prediction::default(), &readings, now + Duration::seconds(1))
        .unwrap();

    assert!(outcome.retraining_required);
    assert_eq!(outcome.most_frequent_fault.as_deref(), Some("refrigerant_leak"));
}

#[test]
fn new_fault_reported_exactly_at_threshold() {
    let tracker = make_tracker(1000, 3);
    let readings = SensorReadings::new()
        .with(Sensor::LowPressure, 0.4)
        .with(Sensor::Temperature, 12.0);
    let now = Utc::now();

    let reports: Vec<bool> = (0..5)
        .map(|_| {
            tracker
                .record(&fault("refrigerant_leak", 88.0), &readings, now)
                .unwrap()
                .new_fault
                .is_some()
        })
        .collect();
    assert_eq!(reports, vec![false, false, true, false, false]);
}

#[test]
fn new_fault_carries_label_score_and_sensors() {
    let tracker = make_tracker(1000, 1);
    let readings = SensorReadings::new()
        .with(Sensor::Vibration, 40.0)
        .with(Sensor::AirFlow, 20.0);

    let outcome = tracker
        .record(&fault("fan_failure", 91.5), &readings, Utc::now())
        .unwrap();
    let new_fault = outcome.new_fault.expect("threshold of one fires immediately");
    assert_eq!(new_fault.label, "fan_failure");
    assert_eq!(new_fault.confidence, 91.5);
    assert_eq!(new_fault.affected_sensors, vec![Sensor::Vibration, Sensor::AirFlow]);
}

#[test]
fn most_frequent_fault_empty_store() {
    let tracker = make_tracker(1000, 50);
    assert_eq!(tracker.most_frequent_fault().unwrap(), None);
}

#[test]
fn zero_retraining_threshold_retrains_every_diagnostic() {
    let tracker = make_tracker(0, 50);
    let now = Utc::now();
    for expected_total in 1..=3 {
        let outcome = tracker
            .record(&Prediction::default(), &nominal_readings(), now)
            .unwrap();
        assert_eq!(outcome.total, expected_total);
        assert!(outcome.retraining_required);
    }
    assert_eq!(tracker.summary().unwrap().next_retraining_at, 4);
}
