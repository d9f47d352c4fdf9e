use crate::errors::FrostlineResult;

/// Generative-text service that turns a prompt into explanatory text.
pub trait ITextEnricher: Send + Sync {
    fn generate(&self, prompt: &str) -> FrostlineResult<String>;
}
