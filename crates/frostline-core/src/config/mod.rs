//! Layered configuration: TOML file, then environment overrides for
//! secrets and endpoints, then validation.

pub mod defaults;
pub mod enrichment_config;
pub mod escalation_config;
pub mod learning_config;
pub mod observability_config;
pub mod prediction_config;
pub mod scoring_config;
pub mod sensor_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use enrichment_config::EnrichmentConfig;
pub use escalation_config::EscalationConfig;
pub use learning_config::LearningConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use scoring_config::{ScoringConfig, SeverityWeights};
pub use sensor_config::SensorConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ConfigError, FrostlineResult};

/// Environment variables consulted by [`FrostlineConfig::apply_env_overrides`].
pub mod env_keys {
    pub const PAGING_URL: &str = "FROSTLINE_PAGING_URL";
    pub const TELEGRAM_TOKEN: &str = "FROSTLINE_TELEGRAM_TOKEN";
    pub const TELEGRAM_CHAT_ID: &str = "FROSTLINE_TELEGRAM_CHAT_ID";
    pub const GEMINI_API_KEY: &str = "FROSTLINE_GEMINI_API_KEY";
    pub const PREDICTION_URL: &str = "FROSTLINE_PREDICTION_URL";
    pub const DB_PATH: &str = "FROSTLINE_DB_PATH";
}

/// Top-level configuration aggregating every subsystem section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrostlineConfig {
    pub storage: StorageConfig,
    pub scoring: ScoringConfig,
    pub escalation: EscalationConfig,
    pub enrichment: EnrichmentConfig,
    pub prediction: PredictionConfig,
    pub learning: LearningConfig,
    pub sensors: SensorConfig,
    pub observability: ObservabilityConfig,
}

impl FrostlineConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml_str(toml_str: &str) -> FrostlineResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, apply environment overrides, validate.
    pub fn load(path: &Path) -> FrostlineResult<Self> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(ConfigError::FileNotFound { path: display }.into());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: display.clone(),
            message: e.to_string(),
        })?;
        let mut config: Self = toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: display,
            message: e.to_string(),
        })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Override endpoints and secrets from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Override endpoints and secrets from an arbitrary lookup. Empty values
    /// are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(env_keys::PAGING_URL) {
            self.escalation.webhook_url = Some(url);
        }
        if let Some(token) = get(env_keys::TELEGRAM_TOKEN) {
            self.escalation.telegram_bot_token = Some(token);
        }
        if let Some(chat_id) = get(env_keys::TELEGRAM_CHAT_ID) {
            self.escalation.telegram_chat_id = Some(chat_id);
        }
        if let Some(key) = get(env_keys::GEMINI_API_KEY) {
            self.enrichment.api_key = Some(key);
        }
        if let Some(url) = get(env_keys::PREDICTION_URL) {
            self.prediction.base_url = Some(url);
        }
        if let Some(path) = get(env_keys::DB_PATH) {
            self.storage.db_path = path;
        }
    }

    /// Reject combinations the pipeline cannot run with.
    pub fn validate(&self) -> FrostlineResult<()> {
        let s = &self.scoring;
        if s.investigate_threshold > s.confirm_threshold {
            return Err(invalid(
                "scoring.investigate_threshold",
                format!(
                    "{} exceeds confirm_threshold {}",
                    s.investigate_threshold, s.confirm_threshold
                ),
            ));
        }
        if s.dedup_window_minutes <= 0 {
            return Err(invalid("scoring.dedup_window_minutes", "must be positive"));
        }
        if s.pattern_window_minutes <= 0 {
            return Err(invalid("scoring.pattern_window_minutes", "must be positive"));
        }
        if s.occurrence_cap < 0.0 {
            return Err(invalid("scoring.occurrence_cap", "must not be negative"));
        }
        if s.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(invalid("scoring.utc_offset_minutes", "must be within ±24h"));
        }
        if self.learning.retraining_threshold == 0 {
            return Err(invalid("learning.retraining_threshold", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.sensors.min_coverage) {
            return Err(invalid("sensors.min_coverage", "must be within [0, 1]"));
        }
        match self.escalation.transport.as_str() {
            "none" | "webhook" | "telegram" => {}
            other => {
                return Err(invalid(
                    "escalation.transport",
                    format!("unknown transport {other:?}"),
                ))
            }
        }
        if self.escalation.max_message_chars < 16 {
            return Err(invalid("escalation.max_message_chars", "must be at least 16"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> crate::errors::FrostlineError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
    .into()
}
