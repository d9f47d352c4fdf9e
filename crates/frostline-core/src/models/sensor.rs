use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The eight probes fitted to a monitored refrigeration unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    /// Cabinet temperature, °C.
    Temperature,
    /// Suction-side pressure, bar.
    LowPressure,
    /// Discharge-side pressure, bar.
    HighPressure,
    /// Compressor current, A.
    Current,
    /// Supply voltage, V.
    Voltage,
    /// Compressor vibration, mm/s.
    Vibration,
    /// Relative humidity, %.
    Humidity,
    /// Evaporator air flow, m³/h.
    AirFlow,
}

impl Sensor {
    pub const ALL: [Sensor; 8] = [
        Sensor::Temperature,
        Sensor::LowPressure,
        Sensor::HighPressure,
        Sensor::Current,
        Sensor::Voltage,
        Sensor::Vibration,
        Sensor::Humidity,
        Sensor::AirFlow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Sensor::Temperature => "temperature",
            Sensor::LowPressure => "low_pressure",
            Sensor::HighPressure => "high_pressure",
            Sensor::Current => "current",
            Sensor::Voltage => "voltage",
            Sensor::Vibration => "vibration",
            Sensor::Humidity => "humidity",
            Sensor::AirFlow => "air_flow",
        }
    }

    /// Physically plausible range. Values outside it are kept but logged.
    pub fn plausible_range(self) -> (f64, f64) {
        match self {
            Sensor::Temperature => (-50.0, 50.0),
            Sensor::LowPressure => (0.0, 20.0),
            Sensor::HighPressure => (0.0, 30.0),
            Sensor::Current => (0.0, 50.0),
            Sensor::Voltage => (0.0, 600.0),
            Sensor::Vibration => (0.0, 100.0),
            Sensor::Humidity => (0.0, 100.0),
            Sensor::AirFlow => (0.0, 500.0),
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Sensor::Temperature => "°C",
            Sensor::LowPressure | Sensor::HighPressure => "bar",
            Sensor::Current => "A",
            Sensor::Voltage => "V",
            Sensor::Vibration => "mm/s",
            Sensor::Humidity => "%",
            Sensor::AirFlow => "m³/h",
        }
    }
}

impl FromStr for Sensor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sensor::ALL
            .into_iter()
            .find(|sensor| sensor.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidField {
                field: s.to_string(),
                reason: "unknown sensor".to_string(),
            })
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated batch of sensor readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensorReadings(BTreeMap<Sensor, f64>);

impl SensorReadings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sensor: Sensor, value: f64) {
        self.0.insert(sensor, value);
    }

    pub fn with(mut self, sensor: Sensor, value: f64) -> Self {
        self.insert(sensor, value);
        self
    }

    pub fn get(&self, sensor: Sensor) -> Option<f64> {
        self.0.get(&sensor).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sensors(&self) -> impl Iterator<Item = Sensor> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sensor, f64)> + '_ {
        self.0.iter().map(|(s, v)| (*s, *v))
    }
}
