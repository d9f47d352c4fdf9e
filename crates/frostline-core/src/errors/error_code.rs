//! Stable error codes for callers that wrap the core (HTTP handlers, CLIs).

/// Every error enum implements this to expose a machine-readable code.
pub trait FrostlineErrorCode {
    /// Returns the code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns `[CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const TRANSPORT_TIMEOUT: &str = "TRANSPORT_TIMEOUT";
pub const NOT_CONFIGURED: &str = "NOT_CONFIGURED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
