//! AlertPipeline: validate → find-or-create → score → escalate.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use frostline_core::constants::components;
use frostline_core::errors::FrostlineResult;
use frostline_core::models::{
    AlertOutcome, AlertRecord, DegradationEvent, FaultEvent, RawFaultEvent,
};
use frostline_core::traits::{IAlertStore, IDegradationLog};
use frostline_escalation::EscalationRouter;
use frostline_observability::{alert_span, events, DegradationTracker, TrackedDegradation};
use frostline_scoring::ConfidenceEngine;

/// Runs one fault event through the dedup, scoring and escalation steps.
///
/// Safe to share across threads. The store is the only shared mutable state
/// that matters for correctness; the degradation tracker is a local log.
pub struct AlertPipeline {
    store: Arc<dyn IAlertStore>,
    engine: ConfidenceEngine,
    router: EscalationRouter,
    degradations: Mutex<DegradationTracker>,
    degradation_log: Option<Arc<dyn IDegradationLog>>,
}

impl AlertPipeline {
    pub fn new(store: Arc<dyn IAlertStore>, engine: ConfidenceEngine, router: EscalationRouter) -> Self {
        Self {
            store,
            engine,
            router,
            degradations: Mutex::new(DegradationTracker::new()),
            degradation_log: None,
        }
    }

    /// Also persist every degradation event.
    pub fn with_degradation_log(mut self, log: Arc<dyn IDegradationLog>) -> Self {
        self.degradation_log = Some(log);
        self
    }

    pub fn store(&self) -> &Arc<dyn IAlertStore> {
        &self.store
    }

    pub fn engine(&self) -> &ConfidenceEngine {
        &self.engine
    }

    pub fn router(&self) -> &EscalationRouter {
        &self.router
    }

    /// Process an inbound event at the current time.
    pub fn process(&self, raw: RawFaultEvent) -> FrostlineResult<AlertOutcome> {
        self.process_at(raw, Utc::now())
    }

    /// Process an inbound event as if it arrived at `now`.
    ///
    /// Only a missing title or a store that cannot find, write or rescore
    /// the record fails the call. Everything downstream of the write
    /// degrades instead.
    pub fn process_at(&self, raw: RawFaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertOutcome> {
        let event = FaultEvent::try_from(raw).map_err(|e| {
            tracing::warn!(error = %e, "fault event rejected");
            e
        })?;
        self.submit(&event, now)
    }

    /// Process an already validated event.
    pub fn submit(&self, event: &FaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertOutcome> {
        let _span = alert_span!(event.title).entered();

        let record = self.find_or_create(event, now)?;
        let recent_count = self.recent_count(&record.title, now);

        let breakdown = self.engine.score(&record, recent_count);
        self.store
            .update_score(record.id, breakdown.confidence, breakdown.status)?;
        events::score_computed(
            record.id,
            breakdown.confidence,
            breakdown.status,
            breakdown.pattern_detected,
        );

        let scored = AlertRecord {
            confidence: breakdown.confidence,
            status: breakdown.status,
            ..record
        };

        let report = self.router.escalate(&scored);
        if let Some(reason) = report.delivery_failure() {
            self.record_degradation(components::PAGING, reason, "message dropped", now);
        }
        if let Some(reason) = report.enrichment_failure.as_deref() {
            self.record_degradation(components::ENRICHMENT, reason, "static analysis text", now);
        }

        Ok(AlertOutcome::from_record(
            &scored,
            report.escalated,
            breakdown.pattern_detected,
        ))
    }

    /// Log a collaborator failure and persist it when a log is attached.
    /// A failing log only warns.
    pub fn record_degradation(&self, component: &str, failure: &str, fallback: &str, now: DateTime<Utc>) {
        let event = DegradationEvent::new(component, failure, fallback, now);
        if let Some(log) = &self.degradation_log {
            if let Err(e) = log.record_degradation(&event) {
                tracing::warn!(component, error = %e, "could not persist degradation event");
            }
        }
        self.tracker().record(event);
    }

    /// Mark `component` healthy again after a successful call.
    pub fn mark_recovered(&self, component: &str, now: DateTime<Utc>) {
        self.tracker().mark_recovered(component, now);
    }

    /// Snapshot of the most recent degradations, oldest first. Older entries
    /// survive only in the degradation log.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().to_vec()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.tracker().is_degraded(component)
    }

    fn find_or_create(&self, event: &FaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertRecord> {
        let window = self.engine.dedup_window_minutes();
        match self.store.find_recent(&event.title, window, now)? {
            Some(existing) => {
                let record = self.store.touch(&existing, event, now)?;
                events::alert_recurred(&record);
                Ok(record)
            }
            None => {
                let record = self.store.create(event, now)?;
                events::alert_created(&record);
                Ok(record)
            }
        }
    }

    /// `None` when the store could not answer; scoring then skips the
    /// pattern term.
    fn recent_count(&self, title: &str, now: DateTime<Utc>) -> Option<usize> {
        match self
            .store
            .count_recent(title, self.engine.pattern_window_minutes(), now)
        {
            Ok(count) => {
                self.mark_recovered(components::ALERT_STORE, now);
                Some(count)
            }
            Err(e) => {
                self.record_degradation(
                    components::ALERT_STORE,
                    &e.to_string(),
                    "pattern term skipped",
                    now,
                );
                None
            }
        }
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.degradations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
