use serde::{Deserialize, Serialize};

use super::defaults;

/// External fault-prediction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    /// Retraining is slow; it gets its own budget.
    pub retrain_timeout_secs: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: defaults::DEFAULT_PREDICTION_TIMEOUT_SECS,
            retrain_timeout_secs: defaults::DEFAULT_RETRAIN_TIMEOUT_SECS,
        }
    }
}
