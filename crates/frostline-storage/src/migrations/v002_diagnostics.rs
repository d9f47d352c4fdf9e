//! v002: diagnostics history.

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS diagnostics (
            diagnostic_id TEXT PRIMARY KEY,
            readings      TEXT NOT NULL DEFAULT '{}',
            prediction    TEXT,
            status        TEXT NOT NULL DEFAULT 'pending',
            created_at    TEXT NOT NULL,
            completed_at  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_diagnostics_created ON diagnostics(created_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
