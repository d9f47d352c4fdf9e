use frostline_core::errors::{FrostlineResult, TransportError};
use frostline_core::traits::IPagingTransport;

use super::http_client::{HttpClient, HttpClientConfig};
use super::protocol::{TelegramResponse, TelegramSendMessage};

/// Telegram Bot API `sendMessage` transport. Messages are sent as plain
/// text after [`sanitize`].
pub struct TelegramTransport {
    client: HttpClient,
    chat_id: String,
}

impl TelegramTransport {
    pub fn new(
        api_base: &str,
        bot_token: &str,
        chat_id: &str,
        timeout_secs: u64,
    ) -> FrostlineResult<Self> {
        let base_url = format!("{}/bot{}", api_base.trim_end_matches('/'), bot_token);
        let client = HttpClient::new(HttpClientConfig::new("telegram", base_url, timeout_secs))?;
        Ok(Self {
            client,
            chat_id: chat_id.to_string(),
        })
    }
}

impl IPagingTransport for TelegramTransport {
    fn name(&self) -> &str {
        self.client.name()
    }

    fn deliver(&self, message: &str) -> FrostlineResult<()> {
        let text = sanitize(message);
        let resp: TelegramResponse = self.client.post_json(
            "sendMessage",
            &TelegramSendMessage {
                chat_id: &self.chat_id,
                text: &text,
            },
        )?;
        if !resp.ok {
            return Err(TransportError::InvalidResponse {
                target: self.name().to_string(),
                reason: resp
                    .description
                    .unwrap_or_else(|| "ok=false without description".to_string()),
            }
            .into());
        }
        Ok(())
    }
}

/// Strip angle brackets and spell out ampersands so the Bot API never
/// tries to parse markup.
pub fn sanitize(message: &str) -> String {
    message
        .replace(['<', '>'], "")
        .replace('&', "and")
}
