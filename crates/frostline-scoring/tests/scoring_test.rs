//! Scoring scenarios: every term in isolation, the documented worked
//! examples, status thresholds, and degraded scoring.

use chrono::FixedOffset;
use frostline_core::config::ScoringConfig;
use frostline_core::models::{AlertStatus, FaultEvent, Severity};
use frostline_scoring::{formula, ConfidenceEngine, ScoringContext};
use test_fixtures::{at, make_raw_event, make_record};

fn engine() -> ConfidenceEngine {
    ConfidenceEngine::default()
}

// ── worked examples ─────────────────────────────────────────────────────

#[test]
fn filter_clog_overnight_is_false_positive() {
    let rec = make_record("FilterClog", Severity::Medium, 1, at(3, 0));
    let bd = engine().score(&rec, Some(1));

    assert_eq!(bd.time_of_day, -15.0);
    assert_eq!(bd.confidence, 25.0);
    assert_eq!(bd.status, AlertStatus::FalsePositive);
}

#[test]
fn filter_clog_mid_morning_is_investigating() {
    let rec = make_record("FilterClog", Severity::Medium, 1, at(10, 0));
    let bd = engine().score(&rec, Some(1));

    assert_eq!(bd.confidence, 40.0);
    assert_eq!(bd.status, AlertStatus::Investigating);
}

#[test]
fn capped_critical_recurrence_is_confirmed() {
    let rec = make_record("CompressorTrip", Severity::Critical, 5, at(9, 0));
    let bd = engine().score(&rec, Some(1));

    assert_eq!(bd.occurrence, 60.0);
    assert_eq!(bd.raw, 105.0);
    assert_eq!(bd.confidence, 100.0);
    assert_eq!(bd.status, AlertStatus::Confirmed);
}

#[test]
fn pattern_penalty_on_capped_critical_still_confirms() {
    let rec = make_record("CompressorTrip", Severity::Critical, 5, at(9, 0));
    let bd = engine().score(&rec, Some(6));

    assert_eq!(bd.pattern, -30.0);
    assert!(bd.pattern_detected);
    assert_eq!(bd.confidence, 75.0);
    assert_eq!(bd.status, AlertStatus::Confirmed);
}

#[test]
fn pattern_penalty_suppresses_single_occurrence_records() {
    // Six separate records in the hour, each seen once.
    let rec = make_record("CompressorTrip", Severity::Critical, 1, at(9, 0));

    let fifth = engine().score(&rec, Some(5));
    assert_eq!(fifth.confidence, 60.0);
    assert_eq!(fifth.status, AlertStatus::Investigating);

    let sixth = engine().score(&rec, Some(6));
    assert_eq!(sixth.confidence, 30.0);
    assert_eq!(sixth.status, AlertStatus::FalsePositive);
}

// ── individual terms ────────────────────────────────────────────────────

#[test]
fn occurrence_term_caps_at_sixty() {
    let e = engine();
    let four = e.score(&make_record("A", Severity::Low, 4, at(9, 0)), Some(1));
    let hundred = e.score(&make_record("A", Severity::Low, 100, at(9, 0)), Some(1));
    assert_eq!(four.occurrence, 60.0);
    assert_eq!(hundred.occurrence, 60.0);
    assert_eq!(four.confidence, hundred.confidence);
}

#[test]
fn severity_weights() {
    let e = engine();
    let expected = [
        (Severity::Low, 0.0),
        (Severity::Medium, 5.0),
        (Severity::High, 15.0),
        (Severity::Critical, 25.0),
    ];
    for (severity, weight) in expected {
        let bd = e.score(&make_record("A", severity, 1, at(9, 0)), Some(1));
        assert_eq!(bd.severity, weight, "{severity}");
    }
}

#[test]
fn unknown_severity_scores_as_low() {
    let event = FaultEvent::try_from(make_raw_event(Some("A"), Some("catastrophic"))).unwrap();
    assert_eq!(event.severity, Severity::Low);

    let rec = make_record("A", event.severity, 1, at(9, 0));
    let bd = engine().score(&rec, Some(1));
    assert_eq!(bd.severity, 0.0);
    assert_eq!(bd.confidence, 35.0);
}

#[test]
fn pattern_threshold_is_strictly_greater_than_five() {
    let rec = make_record("A", Severity::High, 1, at(9, 0));
    assert_eq!(engine().score(&rec, Some(5)).pattern, 0.0);
    assert_eq!(engine().score(&rec, Some(6)).pattern, -30.0);
}

#[test]
fn time_of_day_windows() {
    let e = engine();
    let cases = [
        (0, 0, -15.0),
        (5, 59, -15.0),
        (6, 0, 0.0),
        (11, 59, 0.0),
        (12, 0, -10.0),
        (13, 59, -10.0),
        (14, 0, 0.0),
        (23, 59, 0.0),
    ];
    for (h, m, expected) in cases {
        let bd = e.score(&make_record("A", Severity::High, 1, at(h, m)), Some(1));
        assert_eq!(bd.time_of_day, expected, "{h:02}:{m:02}");
    }
}

#[test]
fn time_of_day_uses_site_offset() {
    // 01:00 UTC is 03:00 at UTC+2 and 11:00 at UTC+10.
    let rec = make_record("A", Severity::High, 1, at(1, 0));

    let plus_two = ConfidenceEngine::new(ScoringConfig {
        utc_offset_minutes: 120,
        ..Default::default()
    });
    assert_eq!(plus_two.score(&rec, Some(1)).time_of_day, -15.0);

    let ctx = ScoringContext::new(Some(1)).with_offset(FixedOffset::east_opt(10 * 3600).unwrap());
    assert_eq!(engine().score_with(&rec, &ctx).time_of_day, 0.0);
}

// ── clamp & status ──────────────────────────────────────────────────────

#[test]
fn negative_sum_clamps_to_zero() {
    let rec = make_record("A", Severity::Low, 1, at(3, 0));
    let bd = engine().score(&rec, Some(10));
    assert_eq!(bd.raw, -10.0);
    assert_eq!(bd.confidence, 0.0);
    assert_eq!(bd.status, AlertStatus::FalsePositive);
}

#[test]
fn status_thresholds_are_inclusive_lower_bounds() {
    let e = engine();
    assert_eq!(e.assign_status(100.0), AlertStatus::Confirmed);
    assert_eq!(e.assign_status(70.0), AlertStatus::Confirmed);
    assert_eq!(e.assign_status(69.99), AlertStatus::Investigating);
    assert_eq!(e.assign_status(40.0), AlertStatus::Investigating);
    assert_eq!(e.assign_status(39.99), AlertStatus::FalsePositive);
    assert_eq!(e.assign_status(0.0), AlertStatus::FalsePositive);
}

#[test]
fn status_is_recomputed_not_accumulated() {
    // A confirmed record that starts cycling drops back down.
    let mut rec = make_record("Door", Severity::High, 4, at(9, 0));
    rec.status = AlertStatus::Confirmed;
    rec.confidence = 95.0;

    let bd = engine().score(&rec, Some(6));
    assert_eq!(bd.confidence, 65.0);
    assert_eq!(bd.status, AlertStatus::Investigating);
}

// ── degraded scoring ────────────────────────────────────────────────────

#[test]
fn missing_recent_count_skips_pattern_term() {
    let rec = make_record("A", Severity::Critical, 2, at(9, 0));
    let bd = engine().score(&rec, None);
    assert_eq!(bd.pattern, 0.0);
    assert!(!bd.pattern_detected);
    assert!(!bd.pattern_evaluated);
    assert_eq!(bd.confidence, 75.0);
}

// ── formula / config ────────────────────────────────────────────────────

#[test]
fn breakdown_terms_sum_to_raw() {
    let rec = make_record("A", Severity::High, 3, at(12, 30));
    let ctx = ScoringContext::new(Some(7));
    let config = ScoringConfig::default();
    let bd = formula::compute_breakdown(&rec, &ctx, &config);

    let sum = bd.base + bd.occurrence + bd.severity + bd.pattern + bd.time_of_day;
    assert_eq!(bd.raw, sum);
    assert_eq!(formula::compute(&rec, &ctx, &config), bd.confidence);
}

#[test]
fn custom_weights_flow_through() {
    let config = ScoringConfig {
        base_score: 0.0,
        occurrence_weight: 10.0,
        occurrence_cap: 20.0,
        ..Default::default()
    };
    let e = ConfidenceEngine::new(config);
    let bd = e.score(&make_record("A", Severity::Low, 5, at(9, 0)), Some(1));
    assert_eq!(bd.base, 0.0);
    assert_eq!(bd.occurrence, 20.0);
    assert_eq!(bd.confidence, 20.0);
}

#[test]
fn engine_exposes_windows() {
    let e = engine();
    assert_eq!(e.dedup_window_minutes(), 5);
    assert_eq!(e.pattern_window_minutes(), 60);
}
