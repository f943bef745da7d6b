//! HTTP client for gotiny-compatible shortening APIs.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;

use super::error::ShortenError;
use super::types::{ShortenRequest, ShortenedLink};
use super::ShorteningService;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom: Option<&'a str>,
    use_fallback: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorDetail {
    fn describe(self) -> String {
        match (self.message, self.code) {
            (Some(message), _) => message,
            (None, Some(code)) => code,
            (None, None) => "unspecified error".to_string(),
        }
    }
}

/// Shortening Service client speaking the gotiny JSON API.
///
/// `POST {endpoint}` with `{"input", "custom", "useFallback"}`; the reply is
/// an array of `{long, code}` entries. `link` and `tiny` are derived from
/// `code` when the service leaves them out.
pub struct GotinyClient {
    client: Client,
    endpoint: String,
    link_base: String,
    custom: Option<String>,
    use_fallback: bool,
}

impl GotinyClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ShortenError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ShortenError::unavailable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            link_base: config.link_base.trim_end_matches('/').to_string(),
            custom: config.custom.clone().filter(|c| !c.is_empty()),
            use_fallback: config.use_fallback,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fill in `link` and `tiny` from `code` where missing.
    fn complete(&self, mut entry: ShortenedLink) -> ShortenedLink {
        if let Some(code) = entry.code.as_deref().filter(|c| !c.is_empty()) {
            if entry.link.is_none() {
                entry.link = Some(format!("{}/{}", self.link_base, code));
            }
        }
        if entry.tiny.is_none() {
            entry.tiny = entry.link.as_deref().map(strip_scheme);
        }
        entry
    }

    fn decode(&self, status: StatusCode, body: &str) -> Result<Vec<ShortenedLink>, ShortenError> {
        if status.is_client_error() {
            return Err(ShortenError::invalid_input(error_message(body, status)));
        }
        if !status.is_success() {
            return Err(ShortenError::unavailable(error_message(body, status)));
        }

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Option<Vec<ShortenedLink>>>(body) {
            Ok(entries) => Ok(entries
                .unwrap_or_default()
                .into_iter()
                .map(|entry| self.complete(entry))
                .collect()),
            Err(parse_err) => {
                // Some deployments answer 200 with an error object.
                if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
                    return Err(ShortenError::invalid_input(error.error.describe()));
                }
                tracing::warn!(error = %parse_err, "Undecodable shortening response");
                Err(ShortenError::EmptyResponse)
            }
        }
    }
}

#[async_trait]
impl ShorteningService for GotinyClient {
    async fn shorten(&self, request: &ShortenRequest) -> Result<Vec<ShortenedLink>, ShortenError> {
        let body = CreateBody {
            input: &request.long_url,
            custom: self.custom.as_deref(),
            use_fallback: self.use_fallback,
        };

        tracing::debug!(
            endpoint = %self.endpoint,
            custom = ?self.custom,
            use_fallback = self.use_fallback,
            "Sending shorten request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ShortenError::unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ShortenError::unavailable(format!("Failed to read response body: {e}")))?;

        tracing::debug!(
            status = %status,
            latency_ms = start.elapsed().as_millis() as u64,
            "Shorten response received"
        );

        self.decode(status, &text)
    }
}

fn error_message(body: &str, status: StatusCode) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|error| error.error.describe())
        .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()))
}

fn strip_scheme(url: &str) -> String {
    url.split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .to_string()
}
