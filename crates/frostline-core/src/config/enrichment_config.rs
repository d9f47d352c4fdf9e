use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative-text enrichment of paging messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub enabled: bool,
    pub api_base: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f64,
    pub timeout_secs: u64,
    /// Static text used whenever the service fails or returns nothing.
    pub fallback_text: String,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ENRICHMENT_ENABLED,
            api_base: defaults::DEFAULT_ENRICHMENT_API_BASE.to_string(),
            model: defaults::DEFAULT_ENRICHMENT_MODEL.to_string(),
            api_key: None,
            temperature: defaults::DEFAULT_ENRICHMENT_TEMPERATURE,
            timeout_secs: defaults::DEFAULT_ENRICHMENT_TIMEOUT_SECS,
            fallback_text: defaults::DEFAULT_ENRICHMENT_FALLBACK.to_string(),
        }
    }
}
