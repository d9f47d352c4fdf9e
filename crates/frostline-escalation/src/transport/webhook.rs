use frostline_core::errors::FrostlineResult;
use frostline_core::traits::IPagingTransport;

use super::http_client::{HttpClient, HttpClientConfig};
use super::protocol::WebhookPayload;

/// Posts `{"message": ...}` to a paging webhook. Any 2xx is a delivery.
pub struct WebhookTransport {
    client: HttpClient,
}

impl WebhookTransport {
    pub fn new(url: &str, timeout_secs: u64) -> FrostlineResult<Self> {
        let client = HttpClient::new(HttpClientConfig::new("webhook", url, timeout_secs))?;
        Ok(Self { client })
    }
}

impl IPagingTransport for WebhookTransport {
    fn name(&self) -> &str {
        self.client.name()
    }

    fn deliver(&self, message: &str) -> FrostlineResult<()> {
        self.client
            .post_json_discard("", &WebhookPayload { message })
    }
}
