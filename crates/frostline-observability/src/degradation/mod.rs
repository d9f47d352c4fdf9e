//! Degradation tracking.

pub mod tracker;

pub use tracker::{
    DegradationTracker, RecoveryStatus, TrackedDegradation, DEFAULT_HISTORY_CAPACITY,
};
