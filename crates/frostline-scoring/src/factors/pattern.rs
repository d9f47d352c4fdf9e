use frostline_core::config::ScoringConfig;

/// Cyclic-pattern term.
///
/// A title firing more than `pattern_threshold` times in the pattern window
/// is treated as normal operating cycling and penalized. An unknown count
/// (store failure) contributes nothing.
///
/// Returns `(term, pattern_detected)`.
pub fn calculate(recent_count: Option<usize>, config: &ScoringConfig) -> (f64, bool) {
    match recent_count {
        Some(count) if count > config.pattern_threshold => (config.pattern_penalty, true),
        _ => (0.0, false),
    }
}
