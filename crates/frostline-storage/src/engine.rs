//! StorageEngine: owns the ConnectionPool and implements every store trait
//! the pipeline depends on.

use std::path::Path;

use chrono::{DateTime, Utc};

use frostline_core::config::StorageConfig;
use frostline_core::errors::FrostlineResult;
use frostline_core::models::{
    AlertRecord, AlertStatus, DegradationEvent, DiagnosticRecord, DiagnosticStatus, FaultEvent,
    Prediction, RetrainingEntry,
};
use frostline_core::traits::{IAlertStore, IDegradationLog, IDiagnosticStore, ILearningStore};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{alert_crud, alert_query, degradation_ops, diagnostic_ops, learning_ops};

/// The main storage engine.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed engine with default pool settings.
    pub fn open(path: &Path) -> FrostlineResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open a file-backed engine using the `[storage]` config section.
    /// `db_path` in the config is ignored in favor of `path`.
    pub fn open_with(path: &Path, config: &StorageConfig) -> FrostlineResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), "storage engine opened");
        Ok(engine)
    }

    /// Open an in-memory engine (tests, dry runs).
    pub fn open_in_memory() -> FrostlineResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self { pool };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> FrostlineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::run_migrations(conn))
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Current schema version of the underlying database.
    pub fn schema_version(&self) -> FrostlineResult<u32> {
        self.pool
            .writer
            .with_conn_sync(|conn| migrations::current_version(conn))
    }

    fn with_reader<F, T>(&self, f: F) -> FrostlineResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> FrostlineResult<T>,
    {
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn_sync(f),
        }
    }
}

impl IAlertStore for StorageEngine {
    fn find_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<Option<AlertRecord>> {
        // Dedup must observe the writer's latest commit.
        self.pool
            .writer
            .with_conn_sync(|conn| alert_query::find_recent(conn, title, window_minutes, now))
    }

    fn count_recent(
        &self,
        title: &str,
        window_minutes: i64,
        now: DateTime<Utc>,
    ) -> FrostlineResult<usize> {
        self.pool
            .writer
            .with_conn_sync(|conn| alert_query::count_recent(conn, title, window_minutes, now))
    }

    fn create(&self, event: &FaultEvent, now: DateTime<Utc>) -> FrostlineResult<AlertRecord> {
        self.pool
            .writer
            .with_conn_sync(|conn| alert_crud::insert_alert(conn, event, now))
    }

    fn touch(
        &self,
        record: &AlertRecord,
        event: &FaultEvent,
        now: DateTime<Utc>,
    ) -> FrostlineResult<AlertRecord> {
        self.pool
            .writer
            .with_conn_sync(|conn| alert_crud::touch_alert(conn, record, event, now))
    }

    fn update_score(&self, id: i64, confidence: f64, status: AlertStatus) -> FrostlineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| alert_crud::update_score(conn, id, confidence, status))
    }

    fn get(&self, id: i64) -> FrostlineResult<Option<AlertRecord>> {
        self.with_reader(|conn| alert_crud::get_alert(conn, id))
    }

    fn list_recent(&self, limit: usize) -> FrostlineResult<Vec<AlertRecord>> {
        self.with_reader(|conn| alert_query::list_recent(conn, limit))
    }

    fn count_by_status(&self) -> FrostlineResult<Vec<(AlertStatus, usize)>> {
        self.with_reader(alert_query::count_by_status)
    }
}

impl IDiagnosticStore for StorageEngine {
    fn insert_diagnostic(&self, record: &DiagnosticRecord) -> FrostlineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| diagnostic_ops::insert_diagnostic(conn, record))
    }

    fn complete_diagnostic(
        &self,
        diagnostic_id: &str,
        prediction: &Prediction,
        status: DiagnosticStatus,
        now: DateTime<Utc>,
    ) -> FrostlineResult<()> {
        self.pool.writer.with_conn_sync(|conn| {
            diagnostic_ops::complete_diagnostic(conn, diagnostic_id, prediction, status, now)
        })
    }

    fn get_diagnostic(&self, diagnostic_id: &str) -> FrostlineResult<Option<DiagnosticRecord>> {
        self.with_reader(|conn| diagnostic_ops::get_diagnostic(conn, diagnostic_id))
    }

    fn recent_diagnostics(&self, limit: usize) -> FrostlineResult<Vec<DiagnosticRecord>> {
        self.with_reader(|conn| diagnostic_ops::recent_diagnostics(conn, limit))
    }
}

impl ILearningStore for StorageEngine {
    fn increment_total(&self, now: DateTime<Utc>) -> FrostlineResult<u64> {
        self.pool
            .writer
            .with_conn_sync(|conn| learning_ops::increment_total(conn, now))
    }

    fn total(&self) -> FrostlineResult<u64> {
        self.with_reader(learning_ops::total)
    }

    fn increment_fault(&self, label: &str) -> FrostlineResult<u64> {
        self.pool
            .writer
            .with_conn_sync(|conn| learning_ops::increment_fault(conn, label))
    }

    fn fault_counts(&self) -> FrostlineResult<Vec<(String, u64)>> {
        self.with_reader(learning_ops::fault_counts)
    }

    fn record_retraining(&self, total: u64, now: DateTime<Utc>) -> FrostlineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| learning_ops::record_retraining(conn, total, now))
    }

    fn retraining_history(&self) -> FrostlineResult<Vec<RetrainingEntry>> {
        self.with_reader(learning_ops::retraining_history)
    }
}

impl IDegradationLog for StorageEngine {
    fn record_degradation(&self, event: &DegradationEvent) -> FrostlineResult<()> {
        self.pool
            .writer
            .with_conn_sync(|conn| degradation_ops::insert_degradation(conn, event))
    }

    fn recent_degradations(&self, limit: usize) -> FrostlineResult<Vec<DegradationEvent>> {
        self.with_reader(|conn| degradation_ops::recent_degradations(conn, limit))
    }
}
