//! Chat-completion client for the remote generation service.
//!
//! One request, one response: no streaming, no retries. Any failure is
//! returned to the caller, which aborts the run.

use async_trait::async_trait;
use promptsite_core::{Error, GenerationSettings, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something that turns a system + user instruction pair into text
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send one completion request and return the generated text
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// Model identifier used for requests
    fn model(&self) -> &str;
}

/// Client for OpenAI-compatible chat-completion endpoints (OpenRouter by default)
pub struct ChatCompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl ChatCompletionClient {
    /// Create a client; the API key must already be resolved
    pub fn new(settings: &GenerationSettings, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "{} not set",
                settings.api_key_env
            )));
        }
        settings.validate()?;

        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            api_key,
        })
    }

    /// Create a client with the key taken from the configured environment variable
    pub fn from_env(settings: &GenerationSettings) -> Result<Self> {
        let api_key = settings.resolve_api_key()?;
        Self::new(settings, api_key)
    }
}

#[async_trait]
impl GenerationClient for ChatCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        debug_assert!(!system.is_empty(), "System instruction cannot be empty");
        debug_assert!(!user.is_empty(), "User instruction cannot be empty");

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: system,
                },
                ChatMessage {
                    role: Role::User,
                    content: user,
                },
            ],
            temperature: self.temperature,
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_http_error)?;

        if !status.is_success() {
            return Err(Error::Transport(format!(
                "Request failed with status {}: {}",
                status,
                body.trim()
            )));
        }

        let content = extract_content(&body)?;
        debug!(chars = content.len(), "completion received");
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    System,
    User,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Pull `choices[0].message.content` out of a response body
fn extract_content(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::Protocol(format!("Failed to parse response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::Protocol("No choices in response".to_string()))?
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| Error::Protocol("Response choice has no message content".to_string()))
}

fn map_http_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        Error::Transport(format!("Connection error: {}", error))
    } else {
        Error::Transport(format!("HTTP error: {}", error))
    }
}
