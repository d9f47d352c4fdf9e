use frostline_core::config::ScoringConfig;

/// Occurrence term: `min(occurrences × weight, cap)`.
///
/// Range: 0 – cap. Four occurrences already hit the default cap of 60.
pub fn calculate(occurrences: u32, config: &ScoringConfig) -> f64 {
    (f64::from(occurrences) * config.occurrence_weight).min(config.occurrence_cap)
}
