use crate::errors::FrostlineResult;
use crate::models::{NewFault, Prediction, SensorReadings};

/// External fault-prediction model.
pub trait IFaultPredictor: Send + Sync {
    fn predict(&self, readings: &SensorReadings) -> FrostlineResult<Prediction>;

    /// Ask the service to retrain on everything seen so far.
    fn retrain(&self, total_diagnostics: u64) -> FrostlineResult<()>;

    /// Ask the service to train a dedicated model for a newly frequent fault.
    fn train_new_fault(&self, fault: &NewFault) -> FrostlineResult<()>;
}
