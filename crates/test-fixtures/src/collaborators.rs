//! In-process fakes for the pipeline's outbound seams.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use frostline_core::errors::{FrostlineResult, StorageError, TransportError};
use frostline_core::models::{AlertRecord, AlertStatus, FaultEvent, NewFault, Prediction, SensorReadings};
use frostline_core::traits::{IAlertStore, IFaultPredictor, IPagingTransport, ITextEnricher};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ── paging ──────────────────────────────────────────────────────────────

/// Paging transport that keeps every message it was handed.
#[derive(Default)]
pub struct RecordingTransport {
    delivered: Mutex<Vec<String>>,
    attempts: Mutex<usize>,
    failing: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every delivery fails with a network error.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Successfully delivered messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.delivered).clone()
    }

    /// Delivery attempts, successful or not.
    pub fn attempts(&self) -> usize {
        *lock(&self.attempts)
    }
}

impl IPagingTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    fn deliver(&self, message: &str) -> FrostlineResult<()> {
        *lock(&self.attempts) += 1;
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransportError::Network {
                target: "recording".to_string(),
                reason: "simulated outage".to_string(),
            }
            .into());
        }
        lock(&self.delivered).push(message.to_string());
        Ok(())
    }
}

// ── enrichment ──────────────────────────────────────────────────────────

/// Text enricher returning a canned reply, or failing when none is set.
pub struct RecordingEnricher {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingEnricher {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }
}

impl ITextEnricher for RecordingEnricher {
    fn generate(&self, prompt: &str) -> FrostlineResult<String> {
        lock(&self.prompts).push(prompt.to_string());
        self.reply.clone().ok_or_else(|| {
            TransportError::Timeout {
                target: "enricher".to_string(),
            }
            .into()
        })
    }
}

// ── prediction ──────────────────────────────────────────────────────────

/// Fault predictor returning a fixed verdict and recording training calls.
pub struct RecordingPredictor {
    verdict: Mutex<Option<Prediction>>,
    predictions: Mutex<usize>,
    retrains: Mutex<Vec<u64>>,
    new_faults: Mutex<Vec<NewFault>>,
    training_fails: AtomicBool,
}

impl RecordingPredictor {
    /// Always predicts `verdict`.
    pub fn returning(verdict: Prediction) -> Self {
        Self {
            verdict: Mutex::new(Some(verdict)),
            predictions: Mutex::new(0),
            retrains: Mutex::new(Vec::new()),
            new_faults: Mutex::new(Vec::new()),
            training_fails: AtomicBool::new(false),
        }
    }

    /// Predicts `label` with the given score.
    pub fn fault(label: &str, score: f64) -> Self {
        Self::returning(Prediction {
            fault: Some(label.to_string()),
            score,
            dominant_variable: Some("high_pressure".to_string()),
            error: None,
        })
    }

    /// Predicts a healthy unit.
    pub fn healthy() -> Self {
        Self::returning(Prediction::default())
    }

    /// Every call fails as if the service were down.
    pub fn unreachable() -> Self {
        let p = Self::healthy();
        *lock(&p.verdict) = None;
        p.training_fails.store(true, Ordering::SeqCst);
        p
    }

    pub fn set_verdict(&self, verdict: Prediction) {
        *lock(&self.verdict) = Some(verdict);
    }

    pub fn prediction_calls(&self) -> usize {
        *lock(&self.predictions)
    }

    pub fn retrain_calls(&self) -> Vec<u64> {
        lock(&self.retrains).clone()
    }

    pub fn new_fault_calls(&self) -> Vec<NewFault> {
        lock(&self.new_faults).clone()
    }

    fn outage() -> frostline_core::FrostlineError {
        TransportError::Network {
            target: "predictor".to_string(),
            reason: "connection refused".to_string(),
        }
        .into()
    }
}

impl IFaultPredictor for RecordingPredictor {
    fn predict(&self, _readings: &SensorReadings) -> FrostlineResult<Prediction> {
        *lock(&self.predictions) += 1;
        lock(&self.verdict).clone().ok_or_else(Self::outage)
    }

    fn retrain(&self, total_diagnostics: u64) -> FrostlineResult<()> {
        lock(&self.retrains).push(total_diagnostics);
        if self.training_fails.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        Ok(())
    }

    fn train_new_fault(&self, fault: &NewFault) -> FrostlineResult<()> {
        lock(&self.new_faults).push(fault.clone());
        if self.training_fails.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        Ok(())
    }
}

// ── alert store ─────────────────────────────────────────────────────────

/// Wraps a real store and fails the recent-count query on demand. The inner
/// store is shared so tests can still read it directly.
pub struct FlakyAlertStore<S> {
    inner: Arc<S>,
    count_recent_fails: AtomicBool,
}

impl<S: IAlertStore> FlakyAlertStore<S> {
    pub fn new(inner: Arc<S>) -> Self {
        Self {
            inner,
            count_recent_fails: AtomicBool::new(false),
        }
    }

    pub fn fail_count_recent(&self, fail: bool) {
        self.count_recent_fails.store(fail, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: IAlertStore> IAlertStore for FlakyAlertStore<S> {
    fn find_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<Option<AlertRecord>> {
        self.inner.find_recent(title, window_minutes, now)
    }

    fn count_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<usize> {
        if self.count_recent_fails.load(Ordering::SeqCst) {
            return Err(StorageError::SqliteError {
                message: "database is locked".to_string(),
            }
            .into());
        }
        self.inner.count_recent(title, window_minutes, now)
    }

    fn create(&self, event: &FaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertRecord> {
        self.inner.create(event, now)
    }

    fn touch(
        &self,
        record: &AlertRecord,
        event: &FaultEvent,
        now: DateTime<Utc>,
    ) -> FrostlineResult<AlertRecord> {
        self.inner.touch(record, event, now)
    }

    fn update_score(&self, id: i64, confidence: f64, status: AlertStatus) -> FrostlineResult<()> {
        self.inner.update_score(id, confidence, status)
    }

    fn get(&self, id: i64) -> FrostlineResult<Option<AlertRecord>> {
        self.inner.get(id)
    }

    fn list_recent(&self, limit: usize) -> FrostlineResult<Vec<AlertRecord>> {
        self.inner.list_recent(limit)
    }

    fn count_by_status(&self) -> FrostlineResult<Vec<(AlertStatus, usize)>> {
        self.inner.count_by_status()
    }
}
