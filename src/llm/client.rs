// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Chat-completion client.
//!
//! Speaks the OpenAI-style `chat/completions` format: one user message in,
//! the first choice's content out. A single blocking request per call with
//! no retries.

use crate::config::LlmConfig;
use crate::error::{ConfigError, GacError, LlmError, Result};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompt::PromptText;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f32 = 0.3;

/// Token budget for the generated message.
pub const MAX_TOKENS: u32 = 200;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that turns a prompt into raw model output.
pub trait CompletionBackend {
    /// Produce the raw text of the first candidate completion.
    fn complete(&self, prompt: &PromptText) -> Result<String>;
}

/// A chat message on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Request body.
#[derive(Serialize, Debug)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One candidate completion.
#[derive(Deserialize, Debug)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Response body. Unknown fields are ignored.
#[derive(Deserialize, Debug)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Content of the first choice.
    pub fn into_first_content(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GacError::Llm(LlmError::EmptyResponse))
    }
}

/// Blocking HTTP client for a chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    api_key: String,
    endpoint: String,
    model: String,
    timeout: Duration,
}

impl CompletionClient {
    /// Create a client for `endpoint` using `model`.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client from resolved configuration.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(&config.api_key, &config.endpoint, &config.model)
    }

    /// Override the transport timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the request body for `prompt`.
    pub fn request_body<'a>(&'a self, prompt: &PromptText) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.as_str().to_string(),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    fn http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| GacError::Llm(LlmError::from(e)))
    }
}

impl CompletionBackend for CompletionClient {
    fn complete(&self, prompt: &PromptText) -> Result<String> {
        if self.api_key.trim().is_empty() {
            return Err(GacError::Config(ConfigError::MissingApiKey));
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_len = prompt.as_str().len(),
            "Sending completion request"
        );

        let response = self
            .http_client()?
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&self.request_body(prompt))
            .send()
            .map_err(LlmError::from)?;

        let status = response.status();
        let body = response.text().map_err(LlmError::from)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Completion endpoint rejected request");
            return Err(GacError::Llm(LlmError::Api {
                status: status.as_u16(),
                body,
            }));
        }

        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| LlmError::Decode {
            message: e.to_string(),
        })?;

        tracing::debug!(choices = parsed.choices.len(), "Completion response received");

        parsed.into_first_content()
    }
}
