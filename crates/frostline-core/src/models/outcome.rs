use serde::{Deserialize, Serialize};

use super::alert::{AlertRecord, AlertStatus};

/// Result handed back to whatever layer wraps the alert pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertOutcome {
    pub alert_id: i64,
    pub confidence: f64,
    pub status: AlertStatus,
    pub occurrences: u32,
    pub escalated: bool,
    /// The cyclic-pattern penalty was applied on this scoring pass.
    pub pattern_detected: bool,
}

impl AlertOutcome {
    pub fn from_record(record: &AlertRecord, escalated: bool, pattern_detected: bool) -> Self {
        Self {
            alert_id: record.id,
            confidence: record.confidence,
            status: record.status,
            occurrences: record.occurrences,
            escalated,
            pattern_detected,
        }
    }
}
