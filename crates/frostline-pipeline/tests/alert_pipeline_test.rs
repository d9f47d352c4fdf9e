//! Alert pipeline scenarios against an in-memory store and recording
//! collaborators. All times are UTC with a zero site offset.

use std::sync::Arc;

use frostline_core::constants::components;
use frostline_core::models::{AlertStatus, RawFaultEvent};
use frostline_core::traits::{IAlertStore, IDegradationLog, IPagingTransport};
use frostline_escalation::EscalationRouter;
use frostline_observability::{RecoveryStatus, DEFAULT_HISTORY_CAPACITY};
use frostline_pipeline::AlertPipeline;
use frostline_scoring::ConfidenceEngine;
use frostline_storage::StorageEngine;
use test_fixtures::{
    at, make_raw_event, minutes_after, FlakyAlertStore, RecordingEnricher, RecordingTransport,
};

struct Harness {
    storage: Arc<StorageEngine>,
    transport: Arc<RecordingTransport>,
    pipeline: AlertPipeline,
}

fn make_harness() -> Harness {
    make_harness_with(RecordingTransport::new())
}

fn make_harness_with(transport: RecordingTransport) -> Harness {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let transport = Arc::new(transport);
    let router = EscalationRouter::new(Some(transport.clone() as Arc<dyn IPagingTransport>));
    let pipeline = AlertPipeline::new(storage.clone(), ConfidenceEngine::default(), router)
        .with_degradation_log(storage.clone());
    Harness {
        storage,
        transport,
        pipeline,
    }
}

fn event(title: &str, severity: &str) -> RawFaultEvent {
    make_raw_event(Some(title), Some(severity))
}

// ── dedup ───────────────────────────────────────────────────────────────

#[test]
fn recurrence_inside_window_increments_same_record() {
    let h = make_harness();
    let first = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    let second = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 2))
        .unwrap();
    let third = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 4))
        .unwrap();

    assert_eq!(first.alert_id, second.alert_id);
    assert_eq!(second.alert_id, third.alert_id);
    assert_eq!(
        [first.occurrences, second.occurrences, third.occurrences],
        [1, 2, 3]
    );
    assert_eq!(h.storage.list_recent(10).unwrap().len(), 1);
}

#[test]
fn window_slides_with_last_seen() {
    let h = make_harness();
    let mut ids = Vec::new();
    // Each event lands 4 minutes after the previous one, always inside the window.
    for i in 0..4 {
        let outcome = h
            .pipeline
            .process_at(event("DoorOpen", "high"), minutes_after(at(8, 0), i * 4))
            .unwrap();
        ids.push(outcome.alert_id);
    }
    ids.dedup();
    assert_eq!(ids.len(), 1);
}

#[test]
fn event_after_window_starts_new_record() {
    let h = make_harness();
    let first = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    let later = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 6))
        .unwrap();

    assert_ne!(first.alert_id, later.alert_id);
    assert_eq!(later.occurrences, 1);
    // The old record stays as history.
    let old = h.storage.get(first.alert_id).unwrap().unwrap();
    assert_eq!(old.occurrences, 1);
}

#[test]
fn new_title_is_isolated() {
    let h = make_harness();
    let trip = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    h.pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 1))
        .unwrap();
    let clog = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(9, 2))
        .unwrap();

    assert_ne!(trip.alert_id, clog.alert_id);
    assert_eq!(clog.occurrences, 1);
    assert_eq!(clog.confidence, 40.0);
}

#[test]
fn false_positive_record_is_not_reused() {
    let h = make_harness();
    // medium at 03:00 scores 25 and lands in false_positive.
    let first = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(3, 0))
        .unwrap();
    assert_eq!(first.status, AlertStatus::FalsePositive);

    let second = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(3, 1))
        .unwrap();
    assert_ne!(first.alert_id, second.alert_id);
    assert_eq!(second.occurrences, 1);
}

#[test]
fn stored_record_matches_outcome() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    let stored = h.storage.get(outcome.alert_id).unwrap().unwrap();
    assert_eq!(stored.confidence, outcome.confidence);
    assert_eq!(stored.status, outcome.status);
    assert_eq!(stored.occurrences, outcome.occurrences);
}

// ── scoring ─────────────────────────────────────────────────────────────

#[test]
fn filter_clog_overnight_is_false_positive() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(3, 0))
        .unwrap();
    assert_eq!(outcome.confidence, 25.0);
    assert_eq!(outcome.status, AlertStatus::FalsePositive);
    assert!(!outcome.escalated);
}

#[test]
fn filter_clog_morning_is_investigating() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(10, 0))
        .unwrap();
    assert_eq!(outcome.confidence, 40.0);
    assert_eq!(outcome.status, AlertStatus::Investigating);
}

#[test]
fn unknown_severity_scores_as_low() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("FanNoise", "catastrophic"), at(9, 0))
        .unwrap();
    // base 20 + one occurrence 15 + low 0
    assert_eq!(outcome.confidence, 35.0);
    assert_eq!(outcome.status, AlertStatus::FalsePositive);
}

#[test]
fn upper_case_severity_is_unrecognized() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "CRITICAL"), at(9, 0))
        .unwrap();
    assert_eq!(outcome.confidence, 35.0);
    let stored = h.storage.get(outcome.alert_id).unwrap().unwrap();
    assert_eq!(stored.severity, frostline_core::models::Severity::Low);
}

#[test]
fn missing_severity_defaults_to_medium() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(make_raw_event(Some("FanNoise"), None), at(9, 0))
        .unwrap();
    assert_eq!(outcome.confidence, 40.0);
}

#[test]
fn status_recomputed_on_every_event() {
    let h = make_harness();
    let first = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    let second = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 2))
        .unwrap();
    let fourth = {
        h.pipeline
            .process_at(event("CompressorTrip", "critical"), at(9, 3))
            .unwrap();
        h.pipeline
            .process_at(event("CompressorTrip", "critical"), at(9, 4))
            .unwrap()
    };

    assert_eq!(first.status, AlertStatus::Investigating);
    assert_eq!(first.confidence, 60.0);
    assert_eq!(second.status, AlertStatus::Confirmed);
    assert_eq!(second.confidence, 75.0);
    assert_eq!(fourth.confidence, 100.0);
}

#[test]
fn cyclic_pattern_suppresses_sixth_record() {
    let h = make_harness();
    let title = "CompressorTrip";

    // Four single-occurrence records, ten minutes apart.
    for minute in [0, 10, 20, 30] {
        let outcome = h
            .pipeline
            .process_at(event(title, "critical"), at(9, minute))
            .unwrap();
        assert_eq!(outcome.occurrences, 1);
        assert!(!outcome.pattern_detected);
    }

    // Fifth record recurs and is confirmed: five records in the hour.
    h.pipeline
        .process_at(event(title, "critical"), at(9, 40))
        .unwrap();
    let confirmed = h
        .pipeline
        .process_at(event(title, "critical"), at(9, 42))
        .unwrap();
    assert_eq!(confirmed.status, AlertStatus::Confirmed);
    assert!(!confirmed.pattern_detected);

    // Sixth record in the hour trips the pattern penalty.
    let sixth = h
        .pipeline
        .process_at(event(title, "critical"), at(9, 50))
        .unwrap();
    assert!(sixth.pattern_detected);
    assert_eq!(sixth.confidence, 30.0);
    assert_eq!(sixth.status, AlertStatus::FalsePositive);
    assert!(!sixth.escalated);
}

#[test]
fn records_outside_pattern_window_do_not_count() {
    let h = make_harness();
    for minute in [0, 10, 20, 30, 40] {
        h.pipeline
            .process_at(event("CompressorTrip", "critical"), at(7, minute))
            .unwrap();
    }
    // All five earlier records are more than an hour old.
    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    assert!(!outcome.pattern_detected);
    assert_eq!(outcome.confidence, 60.0);
}

// ── escalation ──────────────────────────────────────────────────────────

#[test]
fn confirmed_record_is_paged_once_per_event() {
    let h = make_harness();
    h.pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    assert_eq!(h.transport.attempts(), 0);

    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 2))
        .unwrap();
    assert!(outcome.escalated);

    let messages = h.transport.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("CompressorTrip"));
    assert!(messages[0].contains("75% confidence"));
    assert!(messages[0].contains("Severity: CRITICAL"));
    assert!(messages[0].contains("Occurrences: 2"));
}

#[test]
fn non_confirmed_records_make_no_outbound_call() {
    let h = make_harness();
    for (title, severity, minute) in [
        ("FilterClog", "medium", 0),
        ("FanNoise", "low", 10),
        ("CompressorTrip", "critical", 20),
    ] {
        let outcome = h
            .pipeline
            .process_at(event(title, severity), at(10, minute))
            .unwrap();
        assert!(!outcome.escalated);
    }
    assert_eq!(h.transport.attempts(), 0);
}

#[test]
fn delivery_failure_still_reports_escalated() {
    let h = make_harness_with(RecordingTransport::failing());
    h.pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 1))
        .unwrap();

    assert!(outcome.escalated);
    assert_eq!(h.transport.attempts(), 1);
    assert!(h.pipeline.is_degraded(components::PAGING));

    let logged = h.storage.recent_degradations(10).unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].component, components::PAGING);
}

#[test]
fn enrichment_failure_uses_fallback_and_is_recorded() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let transport = Arc::new(RecordingTransport::new());
    let enricher = Arc::new(RecordingEnricher::failing());
    let router = EscalationRouter::new(Some(transport.clone() as Arc<dyn IPagingTransport>))
        .with_enricher(enricher.clone(), "Check the compressor contactor.");
    let pipeline = AlertPipeline::new(storage.clone(), ConfidenceEngine::default(), router);

    pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 1))
        .unwrap();

    assert_eq!(enricher.prompts().len(), 1);
    let messages = transport.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Check the compressor contactor."));
    assert!(pipeline.is_degraded(components::ENRICHMENT));
}

// ── degradation ─────────────────────────────────────────────────────────

#[test]
fn failed_recent_count_degrades_scoring() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let flaky = Arc::new(FlakyAlertStore::new(storage.clone()));
    let pipeline = AlertPipeline::new(
        flaky.clone(),
        ConfidenceEngine::default(),
        EscalationRouter::new(None),
    )
    .with_degradation_log(storage.clone());

    // Five earlier records would make the next one a pattern.
    for minute in [0, 10, 20, 30, 40] {
        pipeline
            .process_at(event("CompressorTrip", "critical"), at(9, minute))
            .unwrap();
    }
    flaky.fail_count_recent(true);

    let outcome = pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 50))
        .unwrap();
    assert!(!outcome.pattern_detected);
    assert_eq!(outcome.confidence, 60.0);
    assert!(pipeline.is_degraded(components::ALERT_STORE));

    let logged = storage.recent_degradations(10).unwrap();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].component, components::ALERT_STORE);
    assert_eq!(logged[0].fallback_used, "pattern term skipped");
}

#[test]
fn store_recovery_is_tracked() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let flaky = Arc::new(FlakyAlertStore::new(storage));
    let pipeline = AlertPipeline::new(
        flaky.clone(),
        ConfidenceEngine::default(),
        EscalationRouter::new(None),
    );

    flaky.fail_count_recent(true);
    pipeline
        .process_at(event("FilterClog", "medium"), at(10, 0))
        .unwrap();
    flaky.fail_count_recent(false);
    pipeline
        .process_at(event("FilterClog", "medium"), at(10, 1))
        .unwrap();

    assert!(!pipeline.is_degraded(components::ALERT_STORE));
    let tracked = pipeline.degradations();
    assert_eq!(tracked.len(), 1);
    assert_eq!(tracked[0].recovery_status, RecoveryStatus::Recovered);
}

#[test]
fn long_paging_outage_keeps_history_bounded() {
    let h = make_harness_with(RecordingTransport::failing());
    let events = DEFAULT_HISTORY_CAPACITY + 40;
    for _ in 0..events {
        h.pipeline
            .process_at(event("CompressorTrip", "critical"), at(9, 0))
            .unwrap();
    }

    // Every event after the first is confirmed and fails to page.
    assert_eq!(h.transport.attempts(), events - 1);
    assert_eq!(h.pipeline.degradations().len(), DEFAULT_HISTORY_CAPACITY);
    assert!(h.pipeline.is_degraded(components::PAGING));
    assert_eq!(
        h.storage.recent_degradations(events).unwrap().len(),
        events - 1
    );
}

// ── async callers ───────────────────────────────────────────────────────

#[tokio::test]
async fn processes_inside_async_runtime() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();
    assert_eq!(outcome.confidence, 60.0);
    assert_eq!(outcome.status, AlertStatus::Investigating);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_recurrences_share_one_record() {
    let h = make_harness();
    let pipeline = Arc::new(h.pipeline);
    pipeline
        .process_at(event("CompressorTrip", "critical"), at(9, 0))
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..3 {
        let pipeline = pipeline.clone();
        handles.push(tokio::spawn(async move {
            pipeline
                .process_at(event("CompressorTrip", "critical"), at(9, 0))
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    let records = h.storage.list_recent(10).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].occurrences, 4);
}

// ── invalid input ───────────────────────────────────────────────────────

#[test]
fn missing_title_is_rejected_without_writing() {
    let h = make_harness();
    let err = h
        .pipeline
        .process_at(make_raw_event(None, Some("critical")), at(9, 0))
        .unwrap_err();
    assert!(err.is_invalid_input());

    let err = h
        .pipeline
        .process_at(make_raw_event(Some("   "), Some("critical")), at(9, 0))
        .unwrap_err();
    assert!(err.is_invalid_input());

    assert!(h.storage.list_recent(10).unwrap().is_empty());
}

#[test]
fn outcome_serializes_with_snake_case() {
    let h = make_harness();
    let outcome = h
        .pipeline
        .process_at(event("FilterClog", "medium"), at(3, 0))
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "false_positive");
    assert_eq!(json["occurrences"], 1);
    assert_eq!(json["escalated"], false);
    assert!(json.get("alert_id").is_some());
    assert!(json.get("pattern_detected").is_some());
}
