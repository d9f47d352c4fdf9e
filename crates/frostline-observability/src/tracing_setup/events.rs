//! Structured log events for pipeline decisions.
//!
//! Each function emits one `tracing` event with an `event` field naming it.

use frostline_core::models::{AlertRecord, AlertStatus};

pub fn alert_created(record: &AlertRecord) {
    tracing::info!(
        event = "alert_created",
        alert_id = record.id,
        title = %record.title,
        severity = %record.severity,
        "alert created"
    );
}

pub fn alert_recurred(record: &AlertRecord) {
    tracing::info!(
        event = "alert_recurred",
        alert_id = record.id,
        title = %record.title,
        occurrences = record.occurrences,
        "alert recurred"
    );
}

pub fn score_computed(alert_id: i64, confidence: f64, status: AlertStatus, pattern_detected: bool) {
    tracing::info!(
        event = "score_computed",
        alert_id = alert_id,
        confidence = confidence,
        status = %status,
        pattern_detected = pattern_detected,
        "alert scored"
    );
}

pub fn escalation_sent(alert_id: i64, transport: &str, message_chars: usize) {
    tracing::info!(
        event = "escalation_sent",
        alert_id = alert_id,
        transport = %transport,
        message_chars = message_chars,
        "escalation delivered"
    );
}

pub fn escalation_failed(alert_id: i64, transport: &str, reason: &str) {
    tracing::warn!(
        event = "escalation_failed",
        alert_id = alert_id,
        transport = %transport,
        reason = %reason,
        "escalation delivery failed"
    );
}

pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

pub fn diagnostic_completed(diagnostic_id: &str, fault: Option<&str>, score: f64) {
    tracing::info!(
        event = "diagnostic_completed",
        diagnostic_id = %diagnostic_id,
        fault = ?fault,
        score = score,
        "diagnostic completed"
    );
}

pub fn retraining_triggered(total: u64, most_frequent_fault: Option<&str>) {
    tracing::info!(
        event = "retraining_triggered",
        total = total,
        most_frequent_fault = ?most_frequent_fault,
        "model retraining triggered"
    );
}

pub fn new_fault_detected(label: &str, confidence: f64) {
    tracing::info!(
        event = "new_fault_detected",
        label = %label,
        confidence = confidence,
        "new fault type crossed training threshold"
    );
}
