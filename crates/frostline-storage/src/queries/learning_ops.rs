//! Continuous-learning counters and the retraining log.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use frostline_core::errors::FrostlineResult;
use frostline_core::models::RetrainingEntry;

use super::{column_time, to_db_time};
use crate::to_storage_err;

const TOTAL_COUNTER: &str = "total_diagnostics";

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

pub fn increment_total(conn: &Connection, now: DateTime<Utc>) -> FrostlineResult<u64> {
    conn.execute(
        "INSERT INTO learning_counters (name, value, updated_at) VALUES (?1, 1, ?2)
         ON CONFLICT(name) DO UPDATE SET value = value + 1, updated_at = excluded.updated_at",
        params![TOTAL_COUNTER, to_db_time(now)],
    )
    .map_err(|e| to_storage_err(format!("increment_total: {e}")))?;
    total(conn)
}

pub fn total(conn: &Connection) -> FrostlineResult<u64> {
    let value: Option<i64> = conn
        .query_row(
            "SELECT value FROM learning_counters WHERE name = ?1",
            params![TOTAL_COUNTER],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(format!("total: {e}")))?;
    Ok(value.map(to_count).unwrap_or(0))
}

pub fn increment_fault(conn: &Connection, label: &str) -> FrostlineResult<u64> {
    conn.execute(
        "INSERT INTO fault_type_counts (label, count) VALUES (?1, 1)
         ON CONFLICT(label) DO UPDATE SET count = count + 1",
        params![label],
    )
    .map_err(|e| to_storage_err(format!("increment_fault: {e}")))?;

    let count: i64 = conn
        .query_row(
            "SELECT count FROM fault_type_counts WHERE label = ?1",
            params![label],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(format!("increment_fault read-back: {e}")))?;
    Ok(to_count(count))
}

/// Highest count first; ties broken alphabetically.
pub fn fault_counts(conn: &Connection) -> FrostlineResult<Vec<(String, u64)>> {
    let mut stmt = conn
        .prepare("SELECT label, count FROM fault_type_counts ORDER BY count DESC, label ASC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((row.get::<_, String>(0)?, to_count(row.get::<_, i64>(1)?)))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

pub fn record_retraining(conn: &Connection, total: u64, now: DateTime<Utc>) -> FrostlineResult<()> {
    let total = i64::try_from(total).unwrap_or(i64::MAX);
    conn.execute(
        "INSERT INTO retraining_log (total, triggered_at) VALUES (?1, ?2)",
        params![total, to_db_time(now)],
    )
    .map_err(|e| to_storage_err(format!("record_retraining: {e}")))?;
    Ok(())
}

/// Newest first.
pub fn retraining_history(conn: &Connection) -> FrostlineResult<Vec<RetrainingEntry>> {
    let mut stmt = conn
        .prepare("SELECT total, triggered_at FROM retraining_log ORDER BY id DESC")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            let triggered_at: String = row.get(1)?;
            Ok(RetrainingEntry {
                total: to_count(row.get(0)?),
                triggered_at: column_time(1, &triggered_at)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
