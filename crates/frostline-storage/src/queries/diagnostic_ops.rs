//! Diagnostic history rows. Readings and predictions are stored as JSON.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use frostline_core::errors::{FrostlineResult, StorageError};
use frostline_core::models::{DiagnosticRecord, DiagnosticStatus, Prediction, SensorReadings};

use super::{column_err, column_time, sql_limit, to_db_time};
use crate::to_storage_err;

const DIAGNOSTIC_COLUMNS: &str =
    "diagnostic_id, readings, prediction, status, created_at, completed_at";

fn row_to_diagnostic(row: &Row<'_>) -> rusqlite::Result<DiagnosticRecord> {
    let readings: String = row.get(1)?;
    let prediction: Option<String> = row.get(2)?;
    let status: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let completed_at: Option<String> = row.get(5)?;

    let readings: SensorReadings =
        serde_json::from_str(&readings).map_err(|e| column_err(1, e))?;
    let prediction = prediction
        .map(|p| serde_json::from_str::<Prediction>(&p))
        .transpose()
        .map_err(|e| column_err(2, e))?;

    Ok(DiagnosticRecord {
        diagnostic_id: row.get(0)?,
        readings,
        prediction,
        status: status
            .parse::<DiagnosticStatus>()
            .map_err(|e| column_err(3, e))?,
        created_at: column_time(4, &created_at)?,
        completed_at: completed_at
            .as_deref()
            .map(|t| column_time(5, t))
            .transpose()?,
    })
}

pub fn insert_diagnostic(conn: &Connection, record: &DiagnosticRecord) -> FrostlineResult<()> {
    let readings = serde_json::to_string(&record.readings)?;
    let prediction = record
        .prediction
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    conn.execute(
        "INSERT INTO diagnostics (
            diagnostic_id, readings, prediction, status, created_at, completed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.diagnostic_id,
            readings,
            prediction,
            record.status.as_str(),
            to_db_time(record.created_at),
            record.completed_at.map(to_db_time),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_diagnostic: {e}")))?;
    Ok(())
}

pub fn complete_diagnostic(
    conn: &Connection,
    diagnostic_id: &str,
    prediction: &Prediction,
    status: DiagnosticStatus,
    now: DateTime<Utc>,
) -> FrostlineResult<()> {
    let prediction = serde_json::to_string(prediction)?;
    let changed = conn
        .execute(
            "UPDATE diagnostics SET prediction = ?2, status = ?3, completed_at = ?4
             WHERE diagnostic_id = ?1",
            params![diagnostic_id, prediction, status.as_str(), to_db_time(now)],
        )
        .map_err(|e| to_storage_err(format!("complete_diagnostic: {e}")))?;

    if changed == 0 {
        return Err(StorageError::NotFound {
            entity: "diagnostic".to_string(),
            id: diagnostic_id.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn get_diagnostic(
    conn: &Connection,
    diagnostic_id: &str,
) -> FrostlineResult<Option<DiagnosticRecord>> {
    let sql = format!("SELECT {DIAGNOSTIC_COLUMNS} FROM diagnostics WHERE diagnostic_id = ?1");
    conn.query_row(&sql, params![diagnostic_id], row_to_diagnostic)
        .optional()
        .map_err(|e| to_storage_err(format!("get_diagnostic: {e}")))
}

pub fn recent_diagnostics(conn: &Connection, limit: usize) -> FrostlineResult<Vec<DiagnosticRecord>> {
    let sql = format!(
        "SELECT {DIAGNOSTIC_COLUMNS} FROM diagnostics
         ORDER BY created_at DESC, rowid DESC LIMIT ?1"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![sql_limit(limit)], row_to_diagnostic)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
