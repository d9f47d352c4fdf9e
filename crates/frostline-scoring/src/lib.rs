//! # frostline-scoring
//!
//! Additive confidence heuristic for alert records.
//!
//! ```text
//! confidence = clamp(base + occurrence + severity + pattern + time_of_day, 0, 100)
//! ```
//!
//! Every term is a pure function of the record and a [`ScoringContext`];
//! the store lookup behind the pattern term is injected by the caller.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::ConfidenceEngine;
pub use factors::ScoringContext;
pub use formula::ScoreBreakdown;
