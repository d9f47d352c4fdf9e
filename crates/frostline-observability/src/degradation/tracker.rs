//! Record every degradation event: component, failure mode, fallback used,
//! timestamp, recovery status.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use frostline_core::models::DegradationEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    Recovered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Entries kept in memory before the oldest are evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// In-process history of degradations, bounded to `capacity` entries.
/// Durable copies go to the `degradation_log` table through
/// `IDegradationLog`.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: Vec<TrackedDegradation>,
    capacity: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn record(&mut self, event: DegradationEvent) {
        crate::tracing_setup::events::degradation_triggered(
            &event.component,
            &event.failure,
            &event.fallback_used,
        );
        if self.events.len() >= self.capacity {
            self.evict_one(&event.component);
        }
        self.events.push(TrackedDegradation {
            event,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
    }

    /// Drop the oldest recovered entry. Failing that, drop the oldest active
    /// entry whose component is still covered by a newer active entry or by
    /// the incoming one, so `is_degraded` stays true for every component.
    fn evict_one(&mut self, incoming: &str) {
        let victim = self
            .events
            .iter()
            .position(|t| t.recovery_status == RecoveryStatus::Recovered)
            .or_else(|| {
                self.events.iter().enumerate().position(|(i, t)| {
                    t.event.component == incoming
                        || self.events[i + 1..].iter().any(|later| {
                            later.event.component == t.event.component
                                && later.recovery_status == RecoveryStatus::Active
                        })
                })
            })
            .unwrap_or(0);
        self.events.remove(victim);
    }

    /// Mark every active degradation of `component` as recovered.
    /// Returns how many entries changed.
    pub fn mark_recovered(&mut self, component: &str, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for tracked in self.events.iter_mut() {
            if tracked.event.component == component
                && tracked.recovery_status == RecoveryStatus::Active
            {
                tracked.recovery_status = RecoveryStatus::Recovered;
                tracked.recovered_at = Some(now);
                changed += 1;
            }
        }
        if changed > 0 {
            tracing::info!(component = %component, "component recovered");
        }
        changed
    }

    pub fn events(&self) -> &[TrackedDegradation] {
        &self.events
    }

    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    /// Events for `component` in the trailing `window_secs` before `now`.
    pub fn count_recent(&self, component: &str, window_secs: i64, now: DateTime<Utc>) -> usize {
        let cutoff = now - Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .count()
    }

    /// How long `component` has been continuously degraded, if it is.
    pub fn degraded_duration(&self, component: &str, now: DateTime<Utc>) -> Option<Duration> {
        let earliest = self
            .events
            .iter()
            .filter(|t| {
                t.event.component == component && t.recovery_status == RecoveryStatus::Active
            })
            .map(|t| t.event.timestamp)
            .min()?;
        Some(now - earliest)
    }
}
