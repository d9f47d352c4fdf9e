//! # frostline-core
//!
//! Foundation crate for the Frostline alerting pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FrostlineConfig;
pub use errors::{FrostlineError, FrostlineResult};
pub use models::{AlertOutcome, AlertRecord, AlertStatus, FaultEvent, RawFaultEvent, Severity};
