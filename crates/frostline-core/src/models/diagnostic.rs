use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sensor::SensorReadings;
use crate::errors::ValidationError;

/// Verdict returned by the external fault-prediction service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    /// Fault label, `None` when the unit looks healthy.
    pub fault: Option<String>,
    /// Model confidence in the label, 0–100.
    pub score: f64,
    /// Sensor that contributed most to the verdict.
    pub dominant_variable: Option<String>,
    /// Set when the prediction is a fallback after a service failure.
    pub error: Option<String>,
}

impl Prediction {
    /// Empty verdict used when the service cannot be reached.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Default::default()
        }
    }

    /// The label, if the service reported a non-blank one.
    pub fn fault_label(&self) -> Option<&str> {
        self.fault.as_deref().map(str::trim).filter(|f| !f.is_empty())
    }

    pub fn has_fault(&self) -> bool {
        self.fault_label().is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStatus {
    Pending,
    Completed,
    Error,
}

impl DiagnosticStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticStatus::Pending => "pending",
            DiagnosticStatus::Completed => "completed",
            DiagnosticStatus::Error => "error",
        }
    }
}

impl FromStr for DiagnosticStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(DiagnosticStatus::Pending),
            "completed" => Ok(DiagnosticStatus::Completed),
            "error" => Ok(DiagnosticStatus::Error),
            _ => Err(ValidationError::UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for DiagnosticStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// History entry for one sensor-reading batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub diagnostic_id: String,
    pub readings: SensorReadings,
    pub prediction: Option<Prediction>,
    pub status: DiagnosticStatus,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
