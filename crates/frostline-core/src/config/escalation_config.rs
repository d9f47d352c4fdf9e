use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Paging channel configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    /// Transport kind: "webhook", "telegram", "none".
    pub transport: String,
    /// Target of the webhook transport.
    pub webhook_url: Option<String>,
    pub telegram_api_base: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub timeout_secs: u64,
    pub max_message_chars: usize,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            transport: defaults::DEFAULT_ESCALATION_TRANSPORT.to_string(),
            webhook_url: None,
            telegram_api_base: defaults::DEFAULT_TELEGRAM_API_BASE.to_string(),
            telegram_bot_token: None,
            telegram_chat_id: None,
            timeout_secs: defaults::DEFAULT_PAGING_TIMEOUT_SECS,
            max_message_chars: constants::MAX_PAGING_MESSAGE_CHARS,
        }
    }
}
