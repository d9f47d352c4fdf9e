use std::num::NonZeroU64;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use frostline_core::config::LearningConfig;
use frostline_core::errors::FrostlineResult;
use frostline_core::models::{LearningOutcome, NewFault, Prediction, RetrainingEntry, SensorReadings};
use frostline_core::traits::ILearningStore;
use frostline_observability::events;

/// Point-in-time view of the learning counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningSummary {
    pub total: u64,
    pub fault_counts: Vec<(String, u64)>,
    pub last_retraining: Option<RetrainingEntry>,
    /// Total at which the next retraining fires.
    pub next_retraining_at: u64,
}

pub struct LearningTracker {
    store: Arc<dyn ILearningStore>,
    config: LearningConfig,
    retrain_every: NonZeroU64,
}

impl LearningTracker {
    /// A `retraining_threshold` of 0 retrains on every diagnostic.
    pub fn new(store: Arc<dyn ILearningStore>, config: LearningConfig) -> Self {
        let retrain_every = NonZeroU64::new(config.retraining_threshold).unwrap_or_else(|| {
            tracing::warn!("learning.retraining_threshold is 0, retraining on every diagnostic");
            NonZeroU64::MIN
        });
        Self {
            store,
            config,
            retrain_every,
        }
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }

    /// Count one processed diagnostic.
    ///
    /// - The fault counter for the predicted label is bumped when a fault
    ///   was detected. Reaching `new_fault_threshold` exactly reports a
    ///   [`NewFault`] carrying the sensors present in this batch.
    /// - Retraining is required whenever the total is a multiple of
    ///   `retraining_threshold`; the trigger is appended to the log.
    pub fn record(
        &self,
        prediction: &Prediction,
        readings: &SensorReadings,
        now: DateTime<Utc>,
    ) -> FrostlineResult<LearningOutcome> {
        let total = self.store.increment_total(now)?;
        tracing::debug!(total, fault = ?prediction.fault_label(), "diagnostic counted");
        let fault = prediction.fault_label().map(str::to_string);

        let mut new_fault = None;
        if let Some(label) = fault.as_deref() {
            let count = self.store.increment_fault(label)?;
            if count == self.config.new_fault_threshold {
                events::new_fault_detected(label, prediction.score);
                new_fault = Some(NewFault {
                    label: label.to_string(),
                    confidence: prediction.score,
                    affected_sensors: readings.sensors().collect(),
                });
            }
        }

        let retraining_required = total % self.retrain_every.get() == 0;
        let most_frequent_fault = if retraining_required {
            self.store.record_retraining(total, now)?;
            let top = self.most_frequent_fault()?;
            events::retraining_triggered(total, top.as_deref());
            top
        } else {
            None
        };

        Ok(LearningOutcome {
            total,
            fault,
            retraining_required,
            new_fault,
            most_frequent_fault,
        })
    }

    /// Fault label with the highest count, if any fault was ever recorded.
    pub fn most_frequent_fault(&self) -> FrostlineResult<Option<String>> {
        Ok(self
            .store
            .fault_counts()?
            .into_iter()
            .next()
            .map(|(label, _)| label))
    }

    pub fn summary(&self) -> FrostlineResult<LearningSummary> {
        let total = self.store.total()?;
        let threshold = self.retrain_every.get();
        Ok(LearningSummary {
            total,
            fault_counts: self.store.fault_counts()?,
            last_retraining: self.store.retraining_history()?.into_iter().next(),
            next_retraining_at: (total / threshold + 1) * threshold,
        })
    }
}
