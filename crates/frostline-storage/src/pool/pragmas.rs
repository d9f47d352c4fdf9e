//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 16MB page cache, configurable busy_timeout,
//! foreign_keys ON.

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use crate::to_storage_err;

/// Apply write-side pragmas.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -16000;
        PRAGMA foreign_keys = ON;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(format!("failed to apply pragmas: {e}")))?;
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(format!("failed to set busy_timeout: {e}")))?;
    Ok(())
}

/// Apply read-only pragmas to a read connection.
pub fn apply_read_pragmas(conn: &Connection, busy_timeout_ms: u32) -> FrostlineResult<()> {
    conn.execute_batch(
        "
        PRAGMA query_only = ON;
        PRAGMA cache_size = -16000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| to_storage_err(format!("failed to apply read pragmas: {e}")))?;
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(|e| to_storage_err(format!("failed to set busy_timeout: {e}")))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> FrostlineResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
