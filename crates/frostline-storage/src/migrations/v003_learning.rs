//! v003: learning_counters, fault_type_counts, retraining_log.

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS learning_counters (
            name       TEXT PRIMARY KEY,
            value      INTEGER NOT NULL DEFAULT 0,
            updated_at TEXT
        );

        CREATE TABLE IF NOT EXISTS fault_type_counts (
            label TEXT PRIMARY KEY,
            count INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS retraining_log (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            total        INTEGER NOT NULL,
            triggered_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
