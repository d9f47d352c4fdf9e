//! Domain models shared by every crate.

pub mod alert;
pub mod degradation_event;
pub mod diagnostic;
pub mod fault_event;
pub mod learning;
pub mod outcome;
pub mod sensor;

pub use alert::{AlertRecord, AlertStatus, Severity};
pub use degradation_event::DegradationEvent;
pub use diagnostic::{DiagnosticRecord, DiagnosticStatus, Prediction};
pub use fault_event::{FaultEvent, RawFaultEvent};
pub use learning::{LearningOutcome, NewFault, RetrainingEntry};
pub use outcome::AlertOutcome;
pub use sensor::{Sensor, SensorReadings};
