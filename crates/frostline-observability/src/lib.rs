//! # frostline-observability
//!
//! Subscriber setup, structured events for every pipeline decision,
//! span macros per operation, and the in-process degradation tracker.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{
    DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_HISTORY_CAPACITY,
};
pub use tracing_setup::{events, init_tracing, init_tracing_with};
