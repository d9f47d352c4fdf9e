//! Schema migrations tracked through `PRAGMA user_version`.

pub mod v001_alerts;
pub mod v002_diagnostics;
pub mod v003_learning;
pub mod v004_degradation_log;

use rusqlite::Connection;

use frostline_core::errors::{FrostlineResult, StorageError};

type Migration = fn(&Connection) -> FrostlineResult<()>;

const MIGRATIONS: &[(u32, Migration)] = &[
    (1, v001_alerts::migrate),
    (2, v002_diagnostics::migrate),
    (3, v003_learning::migrate),
    (4, v004_degradation_log::migrate),
];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 4;

/// Apply every migration newer than the database's `user_version`.
pub fn run_migrations(conn: &Connection) -> FrostlineResult<()> {
    let current = current_version(conn)?;

    for (version, migrate) in MIGRATIONS {
        if current >= *version {
            continue;
        }
        migrate(conn).map_err(|e| StorageError::MigrationFailed {
            version: *version,
            reason: e.to_string(),
        })?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| StorageError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Current schema version.
pub fn current_version(conn: &Connection) -> FrostlineResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| {
            StorageError::SqliteError {
                message: e.to_string(),
            }
            .into()
        })
}
