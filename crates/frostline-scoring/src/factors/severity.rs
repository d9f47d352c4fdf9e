use frostline_core::config::ScoringConfig;
use frostline_core::models::Severity;

/// Severity term from the configured weight table.
pub fn calculate(severity: Severity, config: &ScoringConfig) -> f64 {
    config.severity_weights.weight(severity)
}
