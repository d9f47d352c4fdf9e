use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::models::Severity;

/// Per-severity score contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityWeights {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl SeverityWeights {
    pub fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            low: defaults::DEFAULT_SEVERITY_LOW,
            medium: defaults::DEFAULT_SEVERITY_MEDIUM,
            high: defaults::DEFAULT_SEVERITY_HIGH,
            critical: defaults::DEFAULT_SEVERITY_CRITICAL,
        }
    }
}

/// Confidence heuristic constants and recurrence windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_score: f64,
    /// Points per occurrence before the cap.
    pub occurrence_weight: f64,
    pub occurrence_cap: f64,
    pub severity_weights: SeverityWeights,
    /// Pattern penalty applies when the trailing record count exceeds this.
    pub pattern_threshold: usize,
    pub pattern_penalty: f64,
    /// Applied for local hours [0, 6).
    pub overnight_penalty: f64,
    /// Applied for local hours [12, 14).
    pub midday_penalty: f64,
    pub confirm_threshold: f64,
    pub investigate_threshold: f64,
    pub dedup_window_minutes: i64,
    pub pattern_window_minutes: i64,
    /// Offset of the monitored site from UTC, used for the time-of-day term.
    pub utc_offset_minutes: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: defaults::DEFAULT_BASE_SCORE,
            occurrence_weight: defaults::DEFAULT_OCCURRENCE_WEIGHT,
            occurrence_cap: defaults::DEFAULT_OCCURRENCE_CAP,
            severity_weights: SeverityWeights::default(),
            pattern_threshold: defaults::DEFAULT_PATTERN_THRESHOLD,
            pattern_penalty: defaults::DEFAULT_PATTERN_PENALTY,
            overnight_penalty: defaults::DEFAULT_OVERNIGHT_PENALTY,
            midday_penalty: defaults::DEFAULT_MIDDAY_PENALTY,
            confirm_threshold: defaults::DEFAULT_CONFIRM_THRESHOLD,
            investigate_threshold: defaults::DEFAULT_INVESTIGATE_THRESHOLD,
            dedup_window_minutes: constants::DEDUP_WINDOW_MINUTES,
            pattern_window_minutes: constants::PATTERN_WINDOW_MINUTES,
            utc_offset_minutes: defaults::DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}
