//! Wire payloads for the paging endpoints.

use serde::{Deserialize, Serialize};

/// Body posted to a generic paging webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload<'a> {
    pub message: &'a str,
}

/// Telegram Bot API `sendMessage` request.
#[derive(Debug, Clone, Serialize)]
pub struct TelegramSendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
}

/// Envelope every Telegram Bot API response shares.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
}
