use serde::{Deserialize, Serialize};

use super::defaults;

/// Continuous-learning counter thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Retraining triggers every time the diagnostic total is a multiple of this.
    pub retraining_threshold: u64,
    /// A fault type becomes "new" when its count reaches this exactly.
    pub new_fault_threshold: u64,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            retraining_threshold: defaults::DEFAULT_RETRAINING_THRESHOLD,
            new_fault_threshold: defaults::DEFAULT_NEW_FAULT_THRESHOLD,
        }
    }
}
