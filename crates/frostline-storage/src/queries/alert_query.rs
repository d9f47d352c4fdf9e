//! Windowed recurrence lookups and listing queries over alerts.

use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use frostline_core::errors::FrostlineResult;
use frostline_core::models::{AlertRecord, AlertStatus};

use super::alert_crud::{row_to_record, ALERT_COLUMNS};
use super::{sql_limit, to_db_time};
use crate::to_storage_err;

fn window_start(window_minutes: i64, now: DateTime<Utc>) -> String {
    to_db_time(now - Duration::minutes(window_minutes))
}

/// Most recent active record with exactly this title seen at or after
/// `now - window_minutes`. Ties on `last_seen` go to the newer row.
pub fn find_recent(
    conn: &Connection,
    title: &str,
    window_minutes: i64,
    now: DateTime<Utc>,
) -> FrostlineResult<Option<AlertRecord>> {
    let sql = format!(
        "SELECT {ALERT_COLUMNS} FROM alerts
         WHERE title = ?1 AND status != ?2 AND last_seen >= ?3
         ORDER BY last_seen DESC, id DESC
         LIMIT 1"
    );
    conn.query_row(
        &sql,
        params![
            title,
            AlertStatus::FalsePositive.as_str(),
            window_start(window_minutes, now)
        ],
        row_to_record,
    )
    .optional()
    .map_err(|e| to_storage_err(format!("find_recent: {e}")))
}

/// Count of active records with this title seen in the trailing window.
pub fn count_recent(
    conn: &Connection,
    title: &str,
    window_minutes: i64,
    now: DateTime<Utc>,
) -> FrostlineResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM alerts
             WHERE title = ?1 AND status != ?2 AND last_seen >= ?3",
            params![
                title,
                AlertStatus::FalsePositive.as_str(),
                window_start(window_minutes, now)
            ],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(format!("count_recent: {e}")))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Most recently seen records first.
pub fn list_recent(conn: &Connection, limit: usize) -> FrostlineResult<Vec<AlertRecord>> {
    let sql = format!(
        "SELECT {ALERT_COLUMNS} FROM alerts ORDER BY last_seen DESC, id DESC LIMIT ?1"
    );
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![sql_limit(limit)], row_to_record)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Record count per status, in lifecycle order, zeros included.
pub fn count_by_status(conn: &Connection) -> FrostlineResult<Vec<(AlertStatus, usize)>> {
    let mut stmt = conn
        .prepare("SELECT status, COUNT(*) FROM alerts GROUP BY status")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut counts: Vec<(AlertStatus, usize)> =
        AlertStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for row in rows {
        let (status, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        let Ok(status) = status.parse::<AlertStatus>() else {
            tracing::warn!(status = %status, "skipping unknown alert status in count");
            continue;
        };
        if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == status) {
            slot.1 = usize::try_from(count).unwrap_or(0);
        }
    }
    Ok(counts)
}
