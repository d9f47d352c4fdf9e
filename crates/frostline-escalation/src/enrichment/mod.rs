//! Optional generative-text analysis attached to paging messages.

pub mod gemini;
pub mod prompt;

use std::sync::Arc;

use frostline_core::config::EnrichmentConfig;
use frostline_core::errors::{FrostlineResult, TransportError};
use frostline_core::traits::ITextEnricher;

pub use gemini::GeminiEnricher;
pub use prompt::alert_prompt;

/// Text produced for a paging message, and the failure that forced the
/// fallback text, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub text: String,
    pub failure: Option<String>,
}

impl Enrichment {
    pub fn used_fallback(&self) -> bool {
        self.failure.is_some()
    }
}

/// Ask the enricher for text; on error or a blank reply return `fallback`.
pub fn enrich_or_fallback(enricher: &dyn ITextEnricher, prompt: &str, fallback: &str) -> Enrichment {
    match enricher.generate(prompt) {
        Ok(text) if !text.trim().is_empty() => Enrichment {
            text: text.trim().to_string(),
            failure: None,
        },
        Ok(_) => {
            tracing::warn!("enricher returned empty text, using fallback");
            Enrichment {
                text: fallback.to_string(),
                failure: Some("empty response".to_string()),
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "enrichment failed, using fallback");
            Enrichment {
                text: fallback.to_string(),
                failure: Some(e.to_string()),
            }
        }
    }
}

/// Build the enricher described by `[enrichment]`. Disabled yields
/// `Ok(None)`; enabled without an API key is a configuration error.
pub fn build_enricher(config: &EnrichmentConfig) -> FrostlineResult<Option<Arc<dyn ITextEnricher>>> {
    if !config.enabled {
        return Ok(None);
    }
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or_else(|| TransportError::NotConfigured {
            target: "enrichment".to_string(),
        })?;
    Ok(Some(Arc::new(GeminiEnricher::new(config, api_key)?)))
}
