use super::error_code::{self, FrostlineErrorCode};

/// Failures talking to an outbound collaborator (paging, prediction,
/// generative text). Always recoverable from the pipeline's point of view.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error calling {target}: {reason}")]
    Network { target: String, reason: String },

    #[error("{target} timed out")]
    Timeout { target: String },

    #[error("{target} returned HTTP {status}: {body}")]
    HttpStatus {
        target: String,
        status: u16,
        body: String,
    },

    #[error("invalid response from {target}: {reason}")]
    InvalidResponse { target: String, reason: String },

    #[error("{target} is not configured")]
    NotConfigured { target: String },
}

impl FrostlineErrorCode for TransportError {
    fn error_code(&self) -> &'static str {
        match self {
            TransportError::Timeout { .. } => error_code::TRANSPORT_TIMEOUT,
            TransportError::NotConfigured { .. } => error_code::NOT_CONFIGURED,
            _ => error_code::TRANSPORT_ERROR,
        }
    }
}
