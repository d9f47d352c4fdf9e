use chrono::{DateTime, Utc};

use crate::errors::FrostlineResult;
use crate::models::{DiagnosticRecord, DiagnosticStatus, Prediction};

/// History of processed sensor-reading batches.
pub trait IDiagnosticStore: Send + Sync {
    fn insert_diagnostic(&self, record: &DiagnosticRecord) -> FrostlineResult<()>;

    fn complete_diagnostic(
        &self,
        diagnostic_id: &str,
        prediction: &Prediction,
        status: DiagnosticStatus,
        now: DateTime<Utc>,
    ) -> FrostlineResult<()>;

    fn get_diagnostic(&self, diagnostic_id: &str) -> FrostlineResult<Option<DiagnosticRecord>>;

    /// Newest first.
    fn recent_diagnostics(&self, limit: usize) -> FrostlineResult<Vec<DiagnosticRecord>>;
}
