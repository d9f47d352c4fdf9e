use super::error_code::{self, FrostlineErrorCode};

/// Rejections of caller-supplied input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("fault event has no title")]
    MissingTitle,

    #[error("unknown severity: {0}")]
    UnknownSeverity(String),

    #[error("unknown status: {0}")]
    UnknownStatus(String),

    #[error("insufficient sensor readings: {present}/{total} present, {required} required")]
    InsufficientReadings {
        present: usize,
        required: usize,
        total: usize,
    },

    #[error("invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
}

impl FrostlineErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
