use crate::errors::FrostlineResult;

/// Human-facing paging channel. Delivery is a single attempt; retries, if
/// any, belong to the implementation.
pub trait IPagingTransport: Send + Sync {
    /// Short name used in logs and degradation events.
    fn name(&self) -> &str;

    fn deliver(&self, message: &str) -> FrostlineResult<()>;
}
