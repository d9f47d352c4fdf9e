//! Shared test builders and fake collaborators.
//!
//! Builders take explicit times so scoring scenarios stay deterministic.
//! Fakes record what they were asked to do and can be told to fail.

pub mod collaborators;

use chrono::{DateTime, Duration, TimeZone, Utc};

use frostline_core::models::{
    AlertRecord, AlertStatus, FaultEvent, RawFaultEvent, Sensor, SensorReadings, Severity,
};

pub use collaborators::{
    FlakyAlertStore, RecordingEnricher, RecordingPredictor, RecordingTransport,
};

/// 2024-05-01 at the given UTC wall-clock time.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, minute, 0)
        .single()
        .unwrap_or_else(|| panic!("invalid fixture time {hour:02}:{minute:02}"))
}

/// `base` shifted by whole minutes.
pub fn minutes_after(base: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    base + Duration::minutes(minutes)
}

pub fn make_event(title: &str, severity: Severity) -> FaultEvent {
    FaultEvent::new(title, format!("{title} detected"), severity)
}

pub fn make_raw_event(title: Option<&str>, severity: Option<&str>) -> RawFaultEvent {
    RawFaultEvent {
        title: title.map(str::to_string),
        message: Some("raw fixture message".to_string()),
        severity: severity.map(str::to_string),
        diagnostic_id: None,
    }
}

/// A freshly created record (status `new`, confidence 0) seen at `seen`.
pub fn make_record(title: &str, severity: Severity, occurrences: u32, seen: DateTime<Utc>) -> AlertRecord {
    AlertRecord {
        id: 1,
        title: title.to_string(),
        message: format!("{title} detected"),
        severity,
        occurrences,
        first_seen: seen,
        last_seen: seen,
        status: AlertStatus::New,
        confidence: 0.0,
        diagnostic_id: None,
    }
}

/// Same as [`make_record`] with a status and confidence already assigned.
pub fn make_scored_record(
    title: &str,
    severity: Severity,
    confidence: f64,
    status: AlertStatus,
) -> AlertRecord {
    AlertRecord {
        confidence,
        status,
        ..make_record(title, severity, 3, at(9, 15))
    }
}

/// A complete batch with every sensor inside its plausible range.
pub fn nominal_readings() -> SensorReadings {
    SensorReadings::new()
        .with(Sensor::Temperature, 3.5)
        .with(Sensor::LowPressure, 2.1)
        .with(Sensor::HighPressure, 14.8)
        .with(Sensor::Current, 7.2)
        .with(Sensor::Voltage, 230.0)
        .with(Sensor::Vibration, 1.4)
        .with(Sensor::Humidity, 62.0)
        .with(Sensor::AirFlow, 180.0)
}
