//! Blocking HTTP client with a timeout and gzip. One attempt per call: a
//! failure goes straight back to the caller.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use frostline_core::errors::{FrostlineError, FrostlineResult, TransportError};

/// Longest response body quoted back in an error.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Short collaborator name used in errors and logs. Never the URL, which
    /// may embed credentials.
    pub name: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpClientConfig {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            name: "http".to_string(),
            base_url: String::new(),
            timeout: Duration::from_secs(5),
        }
    }
}

pub struct HttpClient {
    config: HttpClientConfig,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> FrostlineResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| network_err(&config.name, e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// `base_url` joined with `path` by exactly one slash. An empty path
    /// returns the base unchanged.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.base_url, path)
    }

    /// POST `payload` as JSON and decode the JSON response.
    pub fn post_json<Req, Resp>(&self, path: &str, payload: &Req) -> FrostlineResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        self.post_json_with_query(path, &[], payload)
    }

    /// Like [`post_json`](Self::post_json), with `query` percent-encoded
    /// onto the URL.
    pub fn post_json_with_query<Req, Resp>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        payload: &Req,
    ) -> FrostlineResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let request = self.build_post(path, query, payload)?;
        let resp = self.send(request)?;
        resp.json::<Resp>().map_err(|e| {
            TransportError::InvalidResponse {
                target: self.config.name.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// POST `payload` as JSON, ignoring any response body.
    pub fn post_json_discard<Req>(&self, path: &str, payload: &Req) -> FrostlineResult<()>
    where
        Req: Serialize + ?Sized,
    {
        let request = self.build_post(path, &[], payload)?;
        self.send(request).map(|_| ())
    }

    /// Build, without sending, the POST request for `path`.
    pub fn build_post<Req>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        payload: &Req,
    ) -> FrostlineResult<reqwest::blocking::Request>
    where
        Req: Serialize + ?Sized,
    {
        self.client
            .post(self.url(path))
            .query(query)
            .json(payload)
            .build()
            .map_err(|e| network_err(&self.config.name, e.without_url().to_string()))
    }

    fn send(&self, request: reqwest::blocking::Request) -> FrostlineResult<reqwest::blocking::Response> {
        let name = &self.config.name;
        let resp = self.client.execute(request).map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout {
                    target: name.clone(),
                }
                .into()
            } else {
                network_err(name, e.without_url().to_string())
            }
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body: String = resp
            .text()
            .unwrap_or_default()
            .chars()
            .take(MAX_ERROR_BODY_CHARS)
            .collect();
        Err(TransportError::HttpStatus {
            target: name.clone(),
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

fn network_err(target: &str, reason: String) -> FrostlineError {
    TransportError::Network {
        target: target.to_string(),
        reason,
    }
    .into()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
