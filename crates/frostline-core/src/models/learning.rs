use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sensor::Sensor;

/// A fault type that has been seen often enough to warrant its own model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFault {
    pub label: String,
    pub confidence: f64,
    pub affected_sensors: Vec<Sensor>,
}

/// Result of recording one diagnostic in the learning counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    pub total: u64,
    pub fault: Option<String>,
    pub retraining_required: bool,
    pub new_fault: Option<NewFault>,
    /// Populated only when retraining is required.
    pub most_frequent_fault: Option<String>,
}

/// One retraining trigger recorded by the learning store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrainingEntry {
    pub total: u64,
    pub triggered_at: DateTime<Utc>,
}
