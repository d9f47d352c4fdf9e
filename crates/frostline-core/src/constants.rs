// Fixed values shared across crates. Tunable values live in `config::defaults`.

/// Trailing window used to match a fault event against an open alert record.
pub const DEDUP_WINDOW_MINUTES: i64 = 5;

/// Trailing window used for cyclic-pattern detection.
pub const PATTERN_WINDOW_MINUTES: i64 = 60;

/// Lower bound of the confidence scale.
pub const CONFIDENCE_MIN: f64 = 0.0;

/// Upper bound of the confidence scale.
pub const CONFIDENCE_MAX: f64 = 100.0;

/// Transport-imposed ceiling on a paging message, in characters.
pub const MAX_PAGING_MESSAGE_CHARS: usize = 4096;

/// Marker appended to a truncated paging message.
pub const TRUNCATION_MARKER: &str = "...";

/// Rendered in place of a missing diagnostic correlation id.
pub const MISSING_DIAGNOSTIC_ID: &str = "N/A";

/// Prefix of generated diagnostic identifiers.
pub const DIAGNOSTIC_ID_PREFIX: &str = "DIAG";

/// Title prefix for alerts raised from a positive fault prediction.
pub const PREDICTED_FAULT_TITLE_PREFIX: &str = "Fault detected";

/// Component names used in degradation events.
pub mod components {
    pub const ALERT_STORE: &str = "alert_store";
    pub const PAGING: &str = "paging";
    pub const ENRICHMENT: &str = "enrichment";
    pub const PREDICTION: &str = "prediction";
    pub const LEARNING: &str = "learning";
}
