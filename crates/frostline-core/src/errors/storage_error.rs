use super::error_code::{self, FrostlineErrorCode};

/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("corrupt row in {table}: {details}")]
    CorruptRow { table: String, details: String },
}

impl FrostlineErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            StorageError::NotFound { .. } => error_code::NOT_FOUND,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
