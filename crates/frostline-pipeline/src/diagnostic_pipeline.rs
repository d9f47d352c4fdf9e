//! DiagnosticPipeline: sensor batch → prediction → alert → learning.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use frostline_core::config::SensorConfig;
use frostline_core::constants::{components, DIAGNOSTIC_ID_PREFIX, PREDICTED_FAULT_TITLE_PREFIX};
use frostline_core::errors::FrostlineResult;
use frostline_core::models::{
    AlertOutcome, DiagnosticRecord, DiagnosticStatus, FaultEvent, LearningOutcome, NewFault,
    Prediction, SensorReadings, Severity,
};
use frostline_core::traits::{IDiagnosticStore, IFaultPredictor};
use frostline_escalation::message::{new_fault_notice, retraining_notice};
use frostline_escalation::Delivery;
use frostline_learning::LearningTracker;
use frostline_observability::{diagnostic_span, events};

use crate::alert_pipeline::AlertPipeline;
use crate::sensors;

/// Everything that happened to one sensor batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    pub diagnostic_id: String,
    pub readings: SensorReadings,
    pub prediction: Prediction,
    pub status: DiagnosticStatus,
    /// Set when a fault was predicted and the alert pipeline accepted it.
    pub alert: Option<AlertOutcome>,
    /// `None` when the prediction failed or the learning store was down.
    pub learning: Option<LearningOutcome>,
}

pub struct DiagnosticPipeline {
    alerts: Arc<AlertPipeline>,
    diagnostics: Arc<dyn IDiagnosticStore>,
    predictor: Arc<dyn IFaultPredictor>,
    learning: LearningTracker,
    sensors: SensorConfig,
}

impl DiagnosticPipeline {
    pub fn new(
        alerts: Arc<AlertPipeline>,
        diagnostics: Arc<dyn IDiagnosticStore>,
        predictor: Arc<dyn IFaultPredictor>,
        learning: LearningTracker,
        sensors: SensorConfig,
    ) -> Self {
        Self {
            alerts,
            diagnostics,
            predictor,
            learning,
            sensors,
        }
    }

    pub fn alerts(&self) -> &AlertPipeline {
        &self.alerts
    }

    pub fn learning(&self) -> &LearningTracker {
        &self.learning
    }

    /// Validate a raw JSON batch and diagnose it.
    pub fn run(&self, raw: &Map<String, Value>, now: DateTime<Utc>) -> FrostlineResult<DiagnosticReport> {
        let readings = sensors::validate_readings(raw, self.sensors.min_coverage)?;
        self.diagnose(readings, now)
    }

    /// Diagnose an already parsed batch. Coverage is still enforced.
    ///
    /// Returns an error only for insufficient readings or when the
    /// diagnostic row itself cannot be written. Prediction, alerting,
    /// learning and paging failures are recorded as degradations.
    pub fn diagnose(&self, readings: SensorReadings, now: DateTime<Utc>) -> FrostlineResult<DiagnosticReport> {
        sensors::check_coverage(&readings, self.sensors.min_coverage)?;

        let diagnostic_id = new_diagnostic_id(now);
        let _span = diagnostic_span!(diagnostic_id).entered();

        self.diagnostics.insert_diagnostic(&DiagnosticRecord {
            diagnostic_id: diagnostic_id.clone(),
            readings: readings.clone(),
            prediction: None,
            status: DiagnosticStatus::Pending,
            created_at: now,
            completed_at: None,
        })?;

        let prediction = self.predict(&readings, now);
        let status = if prediction.error.is_some() {
            DiagnosticStatus::Error
        } else {
            DiagnosticStatus::Completed
        };

        let alert = self.raise_alert(&diagnostic_id, &prediction, now);
        let learning = if status == DiagnosticStatus::Completed {
            self.learn(&prediction, &readings, now)
        } else {
            None
        };

        self.diagnostics
            .complete_diagnostic(&diagnostic_id, &prediction, status, now)?;
        events::diagnostic_completed(&diagnostic_id, prediction.fault_label(), prediction.score);

        Ok(DiagnosticReport {
            diagnostic_id,
            readings,
            prediction,
            status,
            alert,
            learning,
        })
    }

    fn predict(&self, readings: &SensorReadings, now: DateTime<Utc>) -> Prediction {
        match self.predictor.predict(readings) {
            Ok(prediction) => {
                self.alerts.mark_recovered(components::PREDICTION, now);
                prediction
            }
            Err(e) => {
                let reason = e.to_string();
                self.alerts
                    .record_degradation(components::PREDICTION, &reason, "no fault assumed", now);
                Prediction::unavailable(reason)
            }
        }
    }

    fn raise_alert(&self, diagnostic_id: &str, prediction: &Prediction, now: DateTime<Utc>) -> Option<AlertOutcome> {
        let label = prediction.fault_label()?;
        let event = FaultEvent::new(
            format!("{PREDICTED_FAULT_TITLE_PREFIX}: {label}"),
            format!(
                "Model confidence {:.1}%, dominant variable: {}",
                prediction.score,
                prediction.dominant_variable.as_deref().unwrap_or("unknown")
            ),
            Severity::Critical,
        )
        .with_diagnostic_id(diagnostic_id);

        match self.alerts.submit(&event, now) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::error!(error = %e, fault = label, "could not record alert for predicted fault");
                None
            }
        }
    }

    fn learn(&self, prediction: &Prediction, readings: &SensorReadings, now: DateTime<Utc>) -> Option<LearningOutcome> {
        let outcome = match self.learning.record(prediction, readings, now) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.alerts
                    .record_degradation(components::LEARNING, &e.to_string(), "diagnostic not counted", now);
                return None;
            }
        };

        if outcome.retraining_required {
            self.retrain(&outcome, now);
        }
        if let Some(fault) = &outcome.new_fault {
            self.train_new_fault(fault, now);
        }
        Some(outcome)
    }

    fn retrain(&self, outcome: &LearningOutcome, now: DateTime<Utc>) {
        if let Err(e) = self.predictor.retrain(outcome.total) {
            self.alerts
                .record_degradation(components::PREDICTION, &e.to_string(), "retraining skipped", now);
        }
        self.notify(
            &retraining_notice(outcome.total, outcome.most_frequent_fault.as_deref()),
            now,
        );
    }

    fn train_new_fault(&self, fault: &NewFault, now: DateTime<Utc>) {
        if let Err(e) = self.predictor.train_new_fault(fault) {
            self.alerts.record_degradation(
                components::PREDICTION,
                &e.to_string(),
                "new fault training skipped",
                now,
            );
        }
        self.notify(&new_fault_notice(fault), now);
    }

    fn notify(&self, text: &str, now: DateTime<Utc>) {
        if let Delivery::Failed(reason) = self.alerts.router().send_notice(text) {
            self.alerts
                .record_degradation(components::PAGING, &reason, "notice dropped", now);
        }
    }
}

/// `DIAG-YYYYMMDD-HHMMSS-xxxxxxxx`, the suffix taken from a random UUID.
pub fn new_diagnostic_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "{DIAGNOSTIC_ID_PREFIX}-{}-{}",
        now.format("%Y%m%d-%H%M%S"),
        &suffix[..8]
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn diagnostic_id_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 3, 4, 5).unwrap();
        let id = new_diagnostic_id(now);
        assert!(id.starts_with("DIAG-20240501-030405-"), "{id}");
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn diagnostic_ids_are_unique() {
        let now = Utc::now();
        assert_ne!(new_diagnostic_id(now), new_diagnostic_id(now));
    }
}
