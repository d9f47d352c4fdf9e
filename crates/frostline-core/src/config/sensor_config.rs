use serde::{Deserialize, Serialize};

use super::defaults;

/// Sensor batch validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Minimum fraction of the eight sensors a batch must carry.
    pub min_coverage: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            min_coverage: defaults::DEFAULT_MIN_SENSOR_COVERAGE,
        }
    }
}
