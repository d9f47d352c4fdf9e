//! v001: alerts table with the (title, last_seen) index behind dedup and
//! pattern lookups.

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS alerts (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            title         TEXT NOT NULL,
            message       TEXT NOT NULL DEFAULT '',
            severity      TEXT NOT NULL DEFAULT 'medium',
            occurrences   INTEGER NOT NULL DEFAULT 1 CHECK (occurrences >= 1),
            first_seen    TEXT NOT NULL,
            last_seen     TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'new',
            confidence    REAL NOT NULL DEFAULT 0.0,
            diagnostic_id TEXT,
            updated_at    TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_alerts_title_last_seen ON alerts(title, last_seen);
        CREATE INDEX IF NOT EXISTS idx_alerts_status ON alerts(status);
        CREATE INDEX IF NOT EXISTS idx_alerts_last_seen ON alerts(last_seen);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
