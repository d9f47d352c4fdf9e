//! # frostline-storage
//!
//! SQLite persistence layer: one serialized write connection, a read pool
//! for file-backed databases, `user_version` migrations, and query modules
//! for alerts, diagnostics, learning counters, and the degradation log.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use frostline_core::errors::{FrostlineError, StorageError};

/// Wrap a SQLite failure message into the workspace error type.
pub(crate) fn to_storage_err(message: impl Into<String>) -> FrostlineError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}
