//! Paging message templates.

use chrono::{DateTime, FixedOffset, Utc};

use frostline_core::constants::{MISSING_DIAGNOSTIC_ID, TRUNCATION_MARKER};
use frostline_core::models::{AlertRecord, NewFault};

const RULE: &str = "-----------------------";

/// Render the paging message for a confirmed record.
///
/// First-seen time is shown as `HH:MM:SS` in site-local time. When an
/// analysis is given it is appended as its own section.
pub fn format_alert(record: &AlertRecord, offset: FixedOffset, analysis: Option<&str>) -> String {
    let mut out = format!(
        "ALERT CONFIRMED ({confidence:.0}% confidence)\n\
         \n\
         {title}\n\
         {RULE}\n\
         {message}\n\
         {RULE}\n\
         Severity: {severity}\n\
         Occurrences: {occurrences}\n\
         Diagnostic: {diagnostic}\n\
         First seen: {first_seen}\n",
        confidence = record.confidence,
        title = record.title,
        message = record.message,
        severity = record.severity.as_str().to_uppercase(),
        occurrences = record.occurrences,
        diagnostic = record
            .diagnostic_id
            .as_deref()
            .unwrap_or(MISSING_DIAGNOSTIC_ID),
        first_seen = local_clock(record.first_seen, offset),
    );

    if let Some(analysis) = analysis.map(str::trim).filter(|a| !a.is_empty()) {
        out.push_str("\nAnalysis:\n");
        out.push_str(analysis);
        out.push('\n');
    }

    out.push_str("\nAction required: inspect the unit now");
    out
}

/// Notice paged when the prediction model is due for retraining.
pub fn retraining_notice(total: u64, most_frequent_fault: Option<&str>) -> String {
    format!(
        "MODEL RETRAINING STARTED\n\
         \n\
         Diagnostics processed: {total}\n\
         Most frequent fault: {}\n\
         The prediction service is rebuilding its model.",
        most_frequent_fault.unwrap_or("none recorded"),
    )
}

/// Notice paged when a fault type is frequent enough to get its own model.
pub fn new_fault_notice(fault: &NewFault) -> String {
    let sensors = if fault.affected_sensors.is_empty() {
        "unknown".to_string()
    } else {
        fault
            .affected_sensors
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "NEW FAULT TYPE LEARNED\n\
         \n\
         Fault: {label}\n\
         Model confidence: {confidence:.0}%\n\
         Affected sensors: {sensors}\n\
         A dedicated model is being trained.",
        label = fault.label,
        confidence = fault.confidence,
    )
}

/// Cut `message` to at most `max_chars` characters, ending with the
/// truncation marker when anything was removed.
pub fn truncate_message(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }
    let keep = max_chars.saturating_sub(TRUNCATION_MARKER.chars().count());
    let mut out: String = message.chars().take(keep).collect();
    out.push_str(TRUNCATION_MARKER);
    out
}

fn local_clock(t: DateTime<Utc>, offset: FixedOffset) -> String {
    t.with_timezone(&offset).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_messages_alone() {
        assert_eq!(truncate_message("hello", 16), "hello");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let msg = "é".repeat(20);
        let cut = truncate_message(&msg, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with("ééééééé"));
    }

    #[test]
    fn truncate_exact_length_is_untouched() {
        let msg = "x".repeat(4096);
        assert_eq!(truncate_message(&msg, 4096), msg);
    }
}
