//! Request/response types for the prediction service.

use serde::{Deserialize, Serialize};

use frostline_core::models::Sensor;

#[derive(Debug, Serialize)]
pub struct RetrainRequest {
    pub total_diagnostics: u64,
}

#[derive(Debug, Serialize)]
pub struct TrainNewFaultRequest<'a> {
    pub label: &'a str,
    pub confidence: f64,
    pub affected_sensors: &'a [Sensor],
}

/// `/predict` response. `fault` is null for a healthy unit.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictResponse {
    pub fault: Option<String>,
    pub score: f64,
    pub dominant_variable: Option<String>,
}
