use chrono::{DateTime, Utc};

use crate::errors::FrostlineResult;
use crate::models::{AlertRecord, AlertStatus, FaultEvent};

/// Durable collection of alert records with time-windowed recurrence queries.
///
/// Every method takes the reference instant explicitly so callers (and
/// tests) control the clock. Every write is persisted before returning.
pub trait IAlertStore: Send + Sync {
    /// Most recent non-false-positive record with exactly this title whose
    /// `last_seen` falls within `window_minutes` of `now`.
    fn find_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<Option<AlertRecord>>;

    /// Number of non-false-positive records with this title whose
    /// `last_seen` falls within the trailing window.
    fn count_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<usize>;

    /// Insert a fresh record: one occurrence, status `new`, confidence 0.
    fn create(&self, event: &FaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertRecord>;

    /// Register a recurrence: bump `occurrences`, set `last_seen`, take the
    /// event's message (and its diagnostic id, when present).
    fn touch(
        &self,
        record: &AlertRecord,
        event: &FaultEvent,
        now: DateTime<Utc>,
    ) -> FrostlineResult<AlertRecord>;

    /// Persist a scoring result.
    fn update_score(&self, id: i64, confidence: f64, status: AlertStatus) -> FrostlineResult<()>;

    fn get(&self, id: i64) -> FrostlineResult<Option<AlertRecord>>;

    /// Most recently seen records first.
    fn list_recent(&self, limit: usize) -> FrostlineResult<Vec<AlertRecord>>;

    fn count_by_status(&self) -> FrostlineResult<Vec<(AlertStatus, usize)>>;
}
