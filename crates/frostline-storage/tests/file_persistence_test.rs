//! File-backed persistence: data survives engine close + reopen, schema
//! version is recorded, reads through the pool see committed writes.

use chrono::{TimeZone, Utc};
use frostline_core::models::{AlertStatus, DegradationEvent, FaultEvent, Severity};
use frostline_core::traits::{IAlertStore, IDegradationLog, ILearningStore};
use frostline_storage::migrations::LATEST_VERSION;
use frostline_storage::pool::pragmas::verify_wal_mode;
use frostline_storage::StorageEngine;

#[test]
fn alert_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frostline.db");
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

    let id = {
        let store = StorageEngine::open(&path).unwrap();
        let rec = store
            .create(
                &FaultEvent::new("CompressorTrip", "tripped", Severity::Critical),
                now,
            )
            .unwrap();
        store
            .update_score(rec.id, 75.0, AlertStatus::Confirmed)
            .unwrap();
        rec.id
    };

    let store = StorageEngine::open(&path).unwrap();
    let rec = store.get(id).unwrap().expect("record persisted");
    assert_eq!(rec.title, "CompressorTrip");
    assert_eq!(rec.status, AlertStatus::Confirmed);
    assert_eq!(rec.confidence, 75.0);
    assert_eq!(rec.first_seen, now);
}

#[test]
fn reopen_does_not_rerun_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frostline.db");

    {
        let store = StorageEngine::open(&path).unwrap();
        assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
        store.increment_total(Utc::now()).unwrap();
    }

    let store = StorageEngine::open(&path).unwrap();
    assert_eq!(store.schema_version().unwrap(), LATEST_VERSION);
    assert_eq!(store.total().unwrap(), 1);
}

#[test]
fn file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    let wal = store
        .pool()
        .writer
        .with_conn_sync(|conn| verify_wal_mode(conn))
        .unwrap();
    assert!(wal);
}

#[test]
fn pooled_reads_see_committed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let store = StorageEngine::open(&dir.path().join("reads.db")).unwrap();
    let now = Utc::now();

    for i in 0..5 {
        store
            .create(&FaultEvent::new(format!("T{i}"), "", Severity::Low), now)
            .unwrap();
    }
    assert_eq!(store.list_recent(100).unwrap().len(), 5);

    store
        .record_degradation(&DegradationEvent::new("paging", "timeout", "logged", now))
        .unwrap();
    assert_eq!(store.recent_degradations(10).unwrap().len(), 1);
}

#[test]
fn read_pool_exists_only_for_files() {
    let dir = tempfile::tempdir().unwrap();
    let file = StorageEngine::open(&dir.path().join("pool.db")).unwrap();
    assert!(file.pool().readers.as_ref().is_some_and(|r| r.size() >= 1));

    let memory = StorageEngine::open_in_memory().unwrap();
    assert!(memory.pool().readers.is_none());
}
