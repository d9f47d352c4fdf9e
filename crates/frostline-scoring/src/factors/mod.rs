pub mod occurrence;
pub mod pattern;
pub mod severity;
pub mod time_of_day;

use chrono::{FixedOffset, Offset, Utc};

/// Inputs to a score that do not live on the record itself.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Non-false-positive records with the same title in the pattern window,
    /// or `None` when the store could not answer.
    pub recent_count: Option<usize>,
    /// Site-local offset used to read the hour of `last_seen`.
    pub utc_offset: FixedOffset,
}

impl ScoringContext {
    pub fn new(recent_count: Option<usize>) -> Self {
        Self {
            recent_count,
            utc_offset: Utc.fix(),
        }
    }

    pub fn with_offset(mut self, utc_offset: FixedOffset) -> Self {
        self.utc_offset = utc_offset;
        self
    }
}

impl Default for ScoringContext {
    fn default() -> Self {
        Self::new(Some(0))
    }
}
