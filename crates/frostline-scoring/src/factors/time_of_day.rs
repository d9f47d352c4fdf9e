use chrono::{DateTime, FixedOffset, Timelike, Utc};

use frostline_core::config::ScoringConfig;

/// Hours [0, 6): overnight idle, benign excursions.
const OVERNIGHT: std::ops::Range<u32> = 0..6;
/// Hours [12, 14): midday demand peak.
const MIDDAY: std::ops::Range<u32> = 12..14;

/// Time-of-day term, read from `last_seen` in site-local time.
pub fn calculate(last_seen: DateTime<Utc>, offset: FixedOffset, config: &ScoringConfig) -> f64 {
    let hour = last_seen.with_timezone(&offset).hour();
    if OVERNIGHT.contains(&hour) {
        config.overnight_penalty
    } else if MIDDAY.contains(&hour) {
        config.midday_penalty
    } else {
        0.0
    }
}
