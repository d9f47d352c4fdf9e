//! Error types for every Frostline subsystem, plus the top-level
//! [`FrostlineError`] that they all convert into.

pub mod config_error;
pub mod error_code;
pub mod storage_error;
pub mod transport_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::FrostlineErrorCode;
pub use storage_error::StorageError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;

/// Convenience alias used across the workspace.
pub type FrostlineResult<T> = Result<T, FrostlineError>;

/// Top-level error. Only `Validation` is meant to reach the caller of the
/// alert pipeline; the rest are absorbed by fallbacks where the pipeline
/// can keep scoring without them.
#[derive(Debug, thiserror::Error)]
pub enum FrostlineError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FrostlineError {
    /// True when the error was caused by the caller's input rather than a
    /// collaborator or the store.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FrostlineError::Validation(_))
    }
}

impl FrostlineErrorCode for FrostlineError {
    fn error_code(&self) -> &'static str {
        match self {
            FrostlineError::Storage(e) => e.error_code(),
            FrostlineError::Validation(e) => e.error_code(),
            FrostlineError::Transport(e) => e.error_code(),
            FrostlineError::Config(e) => e.error_code(),
            FrostlineError::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
