//! The single write connection. Every write, and every read that must see
//! the latest commit, is serialized through it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use frostline_core::errors::FrostlineResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

/// A single SQLite connection behind a blocking mutex. Safe to use from
/// plain threads and from inside an async runtime alike.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> FrostlineResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> FrostlineResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` while holding the write lock.
    pub fn with_conn_sync<F, T>(&self, f: F) -> FrostlineResult<T>
    where
        F: FnOnce(&Connection) -> FrostlineResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
