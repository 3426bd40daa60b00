//! OpenAI-compatible chat-completions adapter.
//!
//! Speaks the `POST {base}/chat/completions` wire format with bearer
//! auth, which several providers accept. All transport and API failures
//! collapse into [`ModelError`]; the pipeline does not distinguish
//! beyond that.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CompletionRequest, ModelError, trait_def::ModelClient};

/// Default API base for the hosted OpenAI endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// How much of an API error body to keep in the error message.
const ERROR_BODY_LIMIT: usize = 500;

/// Chat-completions client over reqwest.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl<'a> ChatRequest<'a> {
    fn from_completion(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

// ---------------------------------------------------------------------------
// ModelClient implementation
// ---------------------------------------------------------------------------

#[async_trait]
impl ModelClient for OpenAiClient {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ModelError> {
        let body = ChatRequest::from_completion(request);

        tracing::debug!(
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(ModelError::Empty)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
