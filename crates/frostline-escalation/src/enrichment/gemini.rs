//! Gemini `generateContent` client.

use serde::{Deserialize, Serialize};

use frostline_core::config::EnrichmentConfig;
use frostline_core::errors::{FrostlineResult, TransportError};
use frostline_core::traits::ITextEnricher;

use crate::transport::{HttpClient, HttpClientConfig};

/// Cap on generated output, in model tokens.
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content<'a> {
    pub parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
pub struct Part<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: String,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.trim().is_empty())
    }
}

pub struct GeminiEnricher {
    client: HttpClient,
    model: String,
    api_key: String,
    temperature: f64,
}

impl GeminiEnricher {
    pub fn new(config: &EnrichmentConfig, api_key: &str) -> FrostlineResult<Self> {
        let client = HttpClient::new(HttpClientConfig::new(
            "enrichment",
            config.api_base.clone(),
            config.timeout_secs,
        ))?;
        Ok(Self {
            client,
            model: config.model.clone(),
            api_key: api_key.to_string(),
            temperature: config.temperature,
        })
    }

    fn path(&self) -> String {
        format!("models/{}:generateContent", self.model)
    }

    fn request<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        }
    }
}

impl ITextEnricher for GeminiEnricher {
    fn generate(&self, prompt: &str) -> FrostlineResult<String> {
        let response: GenerateResponse = self.client.post_json_with_query(
            &self.path(),
            &[("key", self.api_key.as_str())],
            &self.request(prompt),
        )?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| {
                TransportError::InvalidResponse {
                    target: "enrichment".to_string(),
                    reason: "no candidate text".to_string(),
                }
                .into()
            })
    }
}
