//! v004: degradation_log.

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS degradation_log (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            component     TEXT NOT NULL,
            failure       TEXT NOT NULL,
            fallback_used TEXT NOT NULL,
            timestamp     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_degradation_component ON degradation_log(component);
        CREATE INDEX IF NOT EXISTS idx_degradation_timestamp ON degradation_log(timestamp);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
