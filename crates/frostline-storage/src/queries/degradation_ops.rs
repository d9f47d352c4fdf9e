//! Degradation log persistence.

use rusqlite::{params, Connection};

use frostline_core::errors::FrostlineResult;
use frostline_core::models::DegradationEvent;

use super::{column_time, sql_limit, to_db_time};
use crate::to_storage_err;

pub fn insert_degradation(conn: &Connection, event: &DegradationEvent) -> FrostlineResult<()> {
    conn.execute(
        "INSERT INTO degradation_log (component, failure, fallback_used, timestamp)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            event.component,
            event.failure,
            event.fallback_used,
            to_db_time(event.timestamp),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_degradation: {e}")))?;
    Ok(())
}

/// Newest first.
pub fn recent_degradations(conn: &Connection, limit: usize) -> FrostlineResult<Vec<DegradationEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT component, failure, fallback_used, timestamp FROM degradation_log
             ORDER BY id DESC LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![sql_limit(limit)], |row| {
            let timestamp: String = row.get(3)?;
            Ok(DegradationEvent {
                component: row.get(0)?,
                failure: row.get(1)?,
                fallback_used: row.get(2)?,
                timestamp: column_time(3, &timestamp)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
