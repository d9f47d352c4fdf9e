use frostline_core::constants::MISSING_DIAGNOSTIC_ID;
use frostline_core::models::AlertRecord;

/// Prompt asking for a short field-technician analysis of a confirmed alert.
pub fn alert_prompt(record: &AlertRecord) -> String {
    format!(
        "You are assisting a refrigeration maintenance technician.\n\
         A monitored unit raised a confirmed alert.\n\
         \n\
         Title: {title}\n\
         Details: {message}\n\
         Severity: {severity}\n\
         Occurrences: {occurrences}\n\
         Confidence: {confidence:.0}%\n\
         Diagnostic: {diagnostic}\n\
         \n\
         In at most five short lines, give the most likely cause, the \
         urgency, and the first checks to perform on site. Plain text only.",
        title = record.title,
        message = record.message,
        severity = record.severity,
        occurrences = record.occurrences,
        confidence = record.confidence,
        diagnostic = record
            .diagnostic_id
            .as_deref()
            .unwrap_or(MISSING_DIAGNOSTIC_ID),
    )
}
