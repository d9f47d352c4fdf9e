//! Query modules. Each takes a bare `&Connection` so the engine decides
//! which connection (writer or pooled reader) runs it.

pub mod alert_crud;
pub mod alert_query;
pub mod degradation_ops;
pub mod diagnostic_ops;
pub mod learning_ops;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;

use frostline_core::errors::{FrostlineResult, StorageError};

/// Timestamps are stored as fixed-width RFC 3339 UTC strings
/// (`2024-05-01T03:00:00.000000Z`), so lexical order equals time order and
/// window predicates can compare them directly in SQL.
pub fn to_db_time(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn from_db_time(raw: &str) -> FrostlineResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::CorruptRow {
                table: "<timestamp>".to_string(),
                details: format!("{raw:?}: {e}"),
            }
            .into()
        })
}

/// Same as [`from_db_time`] but usable inside a row-mapping closure.
pub(crate) fn column_time(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Wrap a parse failure of column `idx` as a rusqlite conversion error.
pub(crate) fn column_err<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Clamp a caller-supplied limit into an SQLite integer.
pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
