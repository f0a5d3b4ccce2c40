mod types;

pub use types::{ChatMessage, ChatRequest, ChatResponse, Choice, ModelInfo, ModelsResponse};

use reqwest::{Client, StatusCode};
use thiserror::Error;

/// Default chat-completion endpoint.
pub const DEFAULT_BASE_URL: &str = "https://chatapi.akash.network/api/v1";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("api error: {0}")]
    Api(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("completion returned no choices")]
    EmptyResponse,
}

/// Async HTTP client for an OpenAI-compatible chat-completion endpoint.
///
/// The bearer token is supplied per call — it lives in the user-editable
/// configuration, not in the client. One outbound request per call, no
/// retry; an upstream failure is terminal for that attempt and surfaced as
/// a single descriptive message.
pub struct ChatClient {
    base_url: String,
    client: Client,
}

impl ChatClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request a completion and return the first choice's message content.
    pub async fn complete(
        &self,
        api_token: &str,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ClientError> {
        let body = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        tracing::debug!(model, "requesting chat completion");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let resp = check_status(resp).await?;
        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("decode response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(ClientError::EmptyResponse)
    }

    /// List the models the endpoint offers.
    pub async fn list_models(&self, api_token: &str) -> Result<Vec<ModelInfo>, ClientError> {
        let resp = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(api_token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let resp = check_status(resp).await?;
        let parsed: ModelsResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Transport(format!("decode response: {e}")))?;
        Ok(parsed.data)
    }
}

impl Default for ChatClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api(extract_error_message(status, &body)))
}

/// Pull `error.message` out of an error body when the endpoint provides one,
/// otherwise fall back to the status code.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("chat API returned {status}"))
}
