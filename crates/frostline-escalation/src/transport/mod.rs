//! Paging transports over HTTP.

pub mod http_client;
pub mod protocol;
pub mod telegram;
pub mod webhook;

use std::sync::Arc;

use frostline_core::config::EscalationConfig;
use frostline_core::errors::{FrostlineResult, TransportError};
use frostline_core::traits::IPagingTransport;

pub use http_client::{HttpClient, HttpClientConfig};
pub use telegram::TelegramTransport;
pub use webhook::WebhookTransport;

/// Build the transport named by `escalation.transport`.
///
/// `"none"` yields `Ok(None)`. A named transport with missing endpoint or
/// credentials is a configuration error.
pub fn build_transport(
    config: &EscalationConfig,
) -> FrostlineResult<Option<Arc<dyn IPagingTransport>>> {
    match config.transport.as_str() {
        "none" => Ok(None),
        "webhook" => {
            let url = required(config.webhook_url.as_deref(), "webhook")?;
            Ok(Some(Arc::new(WebhookTransport::new(url, config.timeout_secs)?)))
        }
        "telegram" => {
            let token = required(config.telegram_bot_token.as_deref(), "telegram")?;
            let chat_id = required(config.telegram_chat_id.as_deref(), "telegram")?;
            Ok(Some(Arc::new(TelegramTransport::new(
                &config.telegram_api_base,
                token,
                chat_id,
                config.timeout_secs,
            )?)))
        }
        other => Err(TransportError::NotConfigured {
            target: other.to_string(),
        }
        .into()),
    }
}

fn required<'a>(value: Option<&'a str>, target: &str) -> FrostlineResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            TransportError::NotConfigured {
                target: target.to_string(),
            }
            .into()
        })
}
