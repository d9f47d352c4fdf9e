//! # frostline-pipeline
//!
//! End-to-end flows built from the other crates:
//!
//! - [`AlertPipeline`]: fault event → dedup → score → escalate.
//! - [`DiagnosticPipeline`]: sensor batch → prediction → alert → learning.
//! - [`FrostlineRuntime`]: everything wired from one [`FrostlineConfig`].
//!
//! [`FrostlineConfig`]: frostline_core::FrostlineConfig

pub mod alert_pipeline;
pub mod diagnostic_pipeline;
pub mod prediction;
pub mod runtime;
pub mod sensors;

pub use alert_pipeline::AlertPipeline;
pub use diagnostic_pipeline::{DiagnosticPipeline, DiagnosticReport};
pub use prediction::HttpPredictor;
pub use runtime::FrostlineRuntime;
pub use sensors::validate_readings;
