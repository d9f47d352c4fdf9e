use chrono::{FixedOffset, Offset, Utc};

use frostline_core::config::ScoringConfig;
use frostline_core::models::{AlertRecord, AlertStatus};

use crate::factors::ScoringContext;
use crate::formula::{self, ScoreBreakdown};

/// Confidence engine: applies the weighted-sum heuristic with a fixed
/// configuration and site offset.
pub struct ConfidenceEngine {
    config: ScoringConfig,
    utc_offset: FixedOffset,
}

impl ConfidenceEngine {
    pub fn new(config: ScoringConfig) -> Self {
        let utc_offset = FixedOffset::east_opt(config.utc_offset_minutes * 60).unwrap_or_else(|| {
            tracing::warn!(
                utc_offset_minutes = config.utc_offset_minutes,
                "utc offset out of range, scoring in UTC"
            );
            Utc.fix()
        });
        Self { config, utc_offset }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// Trailing window for matching an event to an existing record.
    pub fn dedup_window_minutes(&self) -> i64 {
        self.config.dedup_window_minutes
    }

    /// Trailing window for the recent-count lookup behind the pattern term.
    pub fn pattern_window_minutes(&self) -> i64 {
        self.config.pattern_window_minutes
    }

    /// Build a context for this engine's site offset.
    pub fn context(&self, recent_count: Option<usize>) -> ScoringContext {
        ScoringContext::new(recent_count).with_offset(self.utc_offset)
    }

    /// Score a record given the recent-count lookup result.
    pub fn score(&self, record: &AlertRecord, recent_count: Option<usize>) -> ScoreBreakdown {
        self.score_with(record, &self.context(recent_count))
    }

    /// Score a record against an explicit context.
    pub fn score_with(&self, record: &AlertRecord, ctx: &ScoringContext) -> ScoreBreakdown {
        let breakdown = formula::compute_breakdown(record, ctx, &self.config);
        if !breakdown.pattern_evaluated {
            tracing::warn!(
                alert_id = record.id,
                title = %record.title,
                "recent count unavailable, pattern term skipped"
            );
        }
        tracing::debug!(
            alert_id = record.id,
            base = breakdown.base,
            occurrence = breakdown.occurrence,
            severity = breakdown.severity,
            pattern = breakdown.pattern,
            time_of_day = breakdown.time_of_day,
            confidence = breakdown.confidence,
            status = %breakdown.status,
            "score computed"
        );
        breakdown
    }

    pub fn assign_status(&self, confidence: f64) -> AlertStatus {
        formula::assign_status(confidence, &self.config)
    }
}

impl Default for ConfidenceEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
