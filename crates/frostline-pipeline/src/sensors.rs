//! Sensor batch validation.

use serde_json::{Map, Value};

use frostline_core::errors::ValidationError;
use frostline_core::models::{Sensor, SensorReadings};

/// Build a [`SensorReadings`] from loosely typed JSON.
///
/// - Keys are sensor names (`temperature`, `low_pressure`, ...); unknown
///   keys are ignored.
/// - Numbers and numeric strings are accepted and rounded to two decimals.
///   Anything else is dropped.
/// - A value outside the sensor's plausible range is kept with a warning.
/// - Fewer sensors than `min_coverage` of the full set is an error.
pub fn validate_readings(raw: &Map<String, Value>, min_coverage: f64) -> Result<SensorReadings, ValidationError> {
    let mut readings = SensorReadings::new();
    let mut dropped = Vec::new();

    for sensor in Sensor::ALL {
        let Some(value) = raw.get(sensor.as_str()) else {
            continue;
        };
        let Some(number) = numeric(value) else {
            dropped.push(sensor.as_str());
            continue;
        };

        let (min, max) = sensor.plausible_range();
        if number < min || number > max {
            tracing::warn!(
                sensor = %sensor,
                value = number,
                min,
                max,
                unit = sensor.unit(),
                "reading outside plausible range"
            );
        }
        readings.insert(sensor, round2(number));
    }

    if !dropped.is_empty() {
        tracing::warn!(sensors = ?dropped, "non-numeric readings dropped");
    }

    check_coverage(&readings, min_coverage)?;
    Ok(readings)
}

/// Reject a batch carrying fewer than `min_coverage` of the eight sensors.
pub fn check_coverage(readings: &SensorReadings, min_coverage: f64) -> Result<(), ValidationError> {
    let total = Sensor::ALL.len();
    let present = readings.len();
    if (present as f64) < (total as f64) * min_coverage {
        return Err(ValidationError::InsufficientReadings {
            present,
            required: ((total as f64) * min_coverage).ceil() as usize,
            total,
        });
    }
    Ok(())
}

fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
