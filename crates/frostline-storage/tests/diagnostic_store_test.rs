//! Diagnostic history persistence.

use chrono::{Duration, TimeZone, Utc};
use frostline_core::errors::{FrostlineError, StorageError};
use frostline_core::models::{
    DiagnosticRecord, DiagnosticStatus, Prediction, Sensor, SensorReadings,
};
use frostline_core::traits::IDiagnosticStore;
use frostline_storage::StorageEngine;

fn make_diagnostic(id: &str, minutes: i64) -> DiagnosticRecord {
    DiagnosticRecord {
        diagnostic_id: id.to_string(),
        readings: SensorReadings::new()
            .with(Sensor::Temperature, 4.5)
            .with(Sensor::HighPressure, 18.2),
        prediction: None,
        status: DiagnosticStatus::Pending,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
            + Duration::minutes(minutes),
        completed_at: None,
    }
}

#[test]
fn insert_and_get_round_trip() {
    let store = StorageEngine::open_in_memory().unwrap();
    let diag = make_diagnostic("DIAG-1", 0);
    store.insert_diagnostic(&diag).unwrap();

    let got = store.get_diagnostic("DIAG-1").unwrap().unwrap();
    assert_eq!(got, diag);
}

#[test]
fn complete_sets_prediction_and_status() {
    let store = StorageEngine::open_in_memory().unwrap();
    let diag = make_diagnostic("DIAG-2", 0);
    store.insert_diagnostic(&diag).unwrap();

    let prediction = Prediction {
        fault: Some("refrigerant_leak".to_string()),
        score: 87.0,
        dominant_variable: Some("low_pressure".to_string()),
        error: None,
    };
    let done_at = diag.created_at + Duration::seconds(2);
    store
        .complete_diagnostic("DIAG-2", &prediction, DiagnosticStatus::Completed, done_at)
        .unwrap();

    let got = store.get_diagnostic("DIAG-2").unwrap().unwrap();
    assert_eq!(got.status, DiagnosticStatus::Completed);
    assert_eq!(got.prediction, Some(prediction));
    assert_eq!(got.completed_at, Some(done_at));
}

#[test]
fn complete_unknown_diagnostic_is_not_found() {
    let store = StorageEngine::open_in_memory().unwrap();
    let err = store
        .complete_diagnostic(
            "missing",
            &Prediction::default(),
            DiagnosticStatus::Error,
            Utc::now(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        FrostlineError::Storage(StorageError::NotFound { .. })
    ));
}

#[test]
fn recent_diagnostics_newest_first() {
    let store = StorageEngine::open_in_memory().unwrap();
    store.insert_diagnostic(&make_diagnostic("A", 0)).unwrap();
    store.insert_diagnostic(&make_diagnostic("B", 5)).unwrap();
    store.insert_diagnostic(&make_diagnostic("C", 10)).unwrap();

    let ids: Vec<String> = store
        .recent_diagnostics(2)
        .unwrap()
        .into_iter()
        .map(|d| d.diagnostic_id)
        .collect();
    assert_eq!(ids, vec!["C", "B"]);
}
