//! Client for the external fault-prediction service.

pub mod http_predictor;
pub mod protocol;

pub use http_predictor::HttpPredictor;
