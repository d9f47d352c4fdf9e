use serde::Serialize;

use frostline_core::config::ScoringConfig;
use frostline_core::constants::{CONFIDENCE_MAX, CONFIDENCE_MIN};
use frostline_core::models::{AlertRecord, AlertStatus};

use crate::factors::{self, ScoringContext};

/// Every term of one score, kept for logging and explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub occurrence: f64,
    pub severity: f64,
    pub pattern: f64,
    pub time_of_day: f64,
    /// Unclamped sum of all terms.
    pub raw: f64,
    /// `raw` clamped to [0, 100].
    pub confidence: f64,
    pub status: AlertStatus,
    pub pattern_detected: bool,
    /// False when the recent-count lookup failed and the pattern term was skipped.
    pub pattern_evaluated: bool,
}

/// Compute the confidence for a record.
pub fn compute(record: &AlertRecord, ctx: &ScoringContext, config: &ScoringConfig) -> f64 {
    compute_breakdown(record, ctx, config).confidence
}

/// Compute the confidence with a full breakdown of each term, plus the
/// resulting status.
pub fn compute_breakdown(
    record: &AlertRecord,
    ctx: &ScoringContext,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let base = config.base_score;
    let occurrence = factors::occurrence::calculate(record.occurrences, config);
    let severity = factors::severity::calculate(record.severity, config);
    let (pattern, pattern_detected) = factors::pattern::calculate(ctx.recent_count, config);
    let time_of_day = factors::time_of_day::calculate(record.last_seen, ctx.utc_offset, config);

    let raw = base + occurrence + severity + pattern + time_of_day;
    let confidence = raw.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX);

    ScoreBreakdown {
        base,
        occurrence,
        severity,
        pattern,
        time_of_day,
        raw,
        confidence,
        status: assign_status(confidence, config),
        pattern_detected,
        pattern_evaluated: ctx.recent_count.is_some(),
    }
}

/// Map a clamped confidence to a lifecycle status. Thresholds are checked
/// from the top down.
pub fn assign_status(confidence: f64, config: &ScoringConfig) -> AlertStatus {
    if confidence >= config.confirm_threshold {
        AlertStatus::Confirmed
    } else if confidence >= config.investigate_threshold {
        AlertStatus::Investigating
    } else {
        AlertStatus::FalsePositive
    }
}
