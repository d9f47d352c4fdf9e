use crate::errors::FrostlineResult;
use crate::models::DegradationEvent;

/// Durable sink for degradation events.
pub trait IDegradationLog: Send + Sync {
    fn record_degradation(&self, event: &DegradationEvent) -> FrostlineResult<()>;

    fn recent_degradations(&self, limit: usize) -> FrostlineResult<Vec<DegradationEvent>>;
}
