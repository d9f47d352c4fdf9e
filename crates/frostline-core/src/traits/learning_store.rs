use chrono::{DateTime, Utc};

use crate::errors::FrostlineResult;
use crate::models::RetrainingEntry;

/// Persistent counters behind the continuous-learning tracker.
pub trait ILearningStore: Send + Sync {
    /// Increment the diagnostic total and return the new value.
    fn increment_total(&self, now: DateTime<Utc>) -> FrostlineResult<u64>;

    fn total(&self) -> FrostlineResult<u64>;

    /// Increment the counter for one fault label and return the new value.
    fn increment_fault(&self, label: &str) -> FrostlineResult<u64>;

    /// All fault counters, highest first.
    fn fault_counts(&self) -> FrostlineResult<Vec<(String, u64)>>;

    fn record_retraining(&self, total: u64, now: DateTime<Utc>) -> FrostlineResult<()>;

    /// Newest first.
    fn retraining_history(&self) -> FrostlineResult<Vec<RetrainingEntry>>;
}
