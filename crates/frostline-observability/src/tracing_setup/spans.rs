//! Span definitions per operation: alert handling, diagnostics, escalation.

/// Span around one fault event, from validation to escalation.
#[macro_export]
macro_rules! alert_span {
    ($title:expr) => {
        tracing::info_span!("frostline.alert", title = %$title)
    };
}

/// Span around one sensor-reading batch.
#[macro_export]
macro_rules! diagnostic_span {
    ($diagnostic_id:expr) => {
        tracing::info_span!("frostline.diagnostic", diagnostic_id = %$diagnostic_id)
    };
}

/// Span around one paging attempt.
#[macro_export]
macro_rules! escalation_span {
    ($alert_id:expr, $transport:expr) => {
        tracing::info_span!("frostline.escalation", alert_id = $alert_id, transport = %$transport)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ALERT: &str = "frostline.alert";
    pub const DIAGNOSTIC: &str = "frostline.diagnostic";
    pub const ESCALATION: &str = "frostline.escalation";
}
