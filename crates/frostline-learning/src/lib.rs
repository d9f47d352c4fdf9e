//! # frostline-learning
//!
//! Counts processed diagnostics and detected fault types so the prediction
//! service can be retrained on schedule and taught new fault types once
//! they become common. Counters live behind [`ILearningStore`]; this crate
//! holds only the decision rules.
//!
//! [`ILearningStore`]: frostline_core::traits::ILearningStore

pub mod tracker;

pub use tracker::{LearningSummary, LearningTracker};
