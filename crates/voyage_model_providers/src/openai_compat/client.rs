//! Chat completions HTTP client.

use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use core::time::Duration;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER};
use voyage_models::llm::GenerationError;

/// HTTP client for an `OpenAI`-compatible chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiCompatClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompatClient {
    /// Creates a new client.
    ///
    /// `base_url` is the API root including any version segment, e.g.
    /// `http://localhost:11434/v1`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url,
        }
    }

    /// Returns the configured API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a chat completion request.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !self.api_key.is_empty() {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|err| {
                    GenerationError::Auth(format!("Invalid API key header: {err}"))
                })?,
            );
        }

        tracing::debug!(%url, model = %request.model, messages = request.messages.len(), "sending chat completion");

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response
            .text()
            .await
            .map_err(|err| GenerationError::Http(err.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, body, retry_after));
        }

        serde_json::from_str(&body).map_err(|err| {
            GenerationError::InvalidResponse(format!(
                "Failed to parse response: {err}\nBody: {body}"
            ))
        })
    }
}

fn status_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> GenerationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Auth(body),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited { retry_after },
        _ => GenerationError::Provider {
            status: Some(status.as_u16()),
            message: body,
            source: None,
        },
    }
}

impl core::fmt::Debug for OpenAiCompatClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiCompatClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
