//! Insert, touch, rescore, and fetch single alert records.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use frostline_core::errors::{FrostlineResult, StorageError};
use frostline_core::models::{AlertRecord, AlertStatus, FaultEvent, Severity};

use super::{column_err, column_time, to_db_time};
use crate::to_storage_err;

/// Column list shared by every alert SELECT, in `row_to_record` order.
pub(crate) const ALERT_COLUMNS: &str = "id, title, message, severity, occurrences, first_seen, \
     last_seen, status, confidence, diagnostic_id";

/// Map one alerts row selected with [`ALERT_COLUMNS`].
pub(crate) fn row_to_record(row: &Row<'_>) -> rusqlite::Result<AlertRecord> {
    let severity: String = row.get(3)?;
    let first_seen: String = row.get(5)?;
    let last_seen: String = row.get(6)?;
    let status: String = row.get(7)?;

    Ok(AlertRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        message: row.get(2)?,
        severity: severity.parse::<Severity>().map_err(|e| column_err(3, e))?,
        occurrences: row.get(4)?,
        first_seen: column_time(5, &first_seen)?,
        last_seen: column_time(6, &last_seen)?,
        status: status.parse::<AlertStatus>().map_err(|e| column_err(7, e))?,
        confidence: row.get(8)?,
        diagnostic_id: row.get(9)?,
    })
}

/// Insert a fresh record: one occurrence, status `new`, confidence 0.
pub fn insert_alert(
    conn: &Connection,
    event: &FaultEvent,
    now: DateTime<Utc>,
) -> FrostlineResult<AlertRecord> {
    let ts = to_db_time(now);
    conn.execute(
        "INSERT INTO alerts (
            title, message, severity, occurrences, first_seen, last_seen,
            status, confidence, diagnostic_id, updated_at
        ) VALUES (?1, ?2, ?3, 1, ?4, ?4, ?5, 0.0, ?6, ?4)",
        params![
            event.title,
            event.message,
            event.severity.as_str(),
            ts,
            AlertStatus::New.as_str(),
            event.diagnostic_id,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_alert: {e}")))?;

    let id = conn.last_insert_rowid();
    require_alert(conn, id)
}

/// Register a recurrence of `record`. The increment happens in SQL so two
/// concurrent touches never lose an occurrence.
pub fn touch_alert(
    conn: &Connection,
    record: &AlertRecord,
    event: &FaultEvent,
    now: DateTime<Utc>,
) -> FrostlineResult<AlertRecord> {
    let ts = to_db_time(now);
    let changed = conn
        .execute(
            "UPDATE alerts SET
                occurrences = occurrences + 1,
                last_seen = ?2,
                message = ?3,
                diagnostic_id = COALESCE(?4, diagnostic_id),
                updated_at = ?2
             WHERE id = ?1",
            params![record.id, ts, event.message, event.diagnostic_id],
        )
        .map_err(|e| to_storage_err(format!("touch_alert: {e}")))?;

    if changed == 0 {
        return Err(not_found(record.id));
    }
    require_alert(conn, record.id)
}

/// Persist a scoring result.
pub fn update_score(
    conn: &Connection,
    id: i64,
    confidence: f64,
    status: AlertStatus,
) -> FrostlineResult<()> {
    let changed = conn
        .execute(
            "UPDATE alerts SET confidence = ?2, status = ?3,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?1",
            params![id, confidence, status.as_str()],
        )
        .map_err(|e| to_storage_err(format!("update_score: {e}")))?;

    if changed == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

pub fn get_alert(conn: &Connection, id: i64) -> FrostlineResult<Option<AlertRecord>> {
    let sql = format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = ?1");
    conn.query_row(&sql, params![id], row_to_record)
        .optional()
        .map_err(|e| to_storage_err(format!("get_alert {id}: {e}")))
}

fn require_alert(conn: &Connection, id: i64) -> FrostlineResult<AlertRecord> {
    get_alert(conn, id)?.ok_or_else(|| not_found(id))
}

fn not_found(id: i64) -> frostline_core::FrostlineError {
    StorageError::NotFound {
        entity: "alert".to_string(),
        id: id.to_string(),
    }
    .into()
}
