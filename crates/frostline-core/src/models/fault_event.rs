use serde::{Deserialize, Serialize};

use super::alert::Severity;
use crate::errors::ValidationError;

/// Unvalidated fault event as it arrives from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFaultEvent {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub diagnostic_id: Option<String>,
}

/// A validated fault event: title present, severity resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultEvent {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub diagnostic_id: Option<String>,
}

impl FaultEvent {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
            diagnostic_id: None,
        }
    }

    pub fn with_diagnostic_id(mut self, diagnostic_id: impl Into<String>) -> Self {
        self.diagnostic_id = Some(diagnostic_id.into());
        self
    }
}

impl TryFrom<RawFaultEvent> for FaultEvent {
    type Error = ValidationError;

    /// A missing or blank title is rejected. A missing severity defaults to
    /// medium; an unrecognized one scores as low.
    fn try_from(raw: RawFaultEvent) -> Result<Self, Self::Error> {
        let title = match raw.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ValidationError::MissingTitle),
        };
        let severity = match raw.severity.as_deref() {
            None => Severity::Medium,
            Some(s) => Severity::parse_lenient(s),
        };
        let diagnostic_id = raw.diagnostic_id.filter(|id| !id.trim().is_empty());
        Ok(Self {
            title,
            message: raw.message.unwrap_or_default(),
            severity,
            diagnostic_id,
        })
    }
}

impl From<FaultEvent> for RawFaultEvent {
    fn from(event: FaultEvent) -> Self {
        Self {
            title: Some(event.title),
            message: Some(event.message),
            severity: Some(event.severity.as_str().to_string()),
            diagnostic_id: event.diagnostic_id,
        }
    }
}
