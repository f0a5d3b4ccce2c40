use std::sync::Mutex;

use async_trait::async_trait;
use specforge_client::{ChatClient, ClientError};

/// The one outbound call per generation. The service programs against this
/// seam; production wires in `ChatClient`, tests inject `MockBackend`.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(
        &self,
        api_token: &str,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ClientError>;
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(
        &self,
        api_token: &str,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ClientError> {
        ChatClient::complete(self, api_token, model, system, user).await
    }
}

/// Scripted backend for tests. Records the last request so assertions can
/// inspect the assembled prompt.
pub struct MockBackend {
    reply: Result<String, String>,
    last_request: Mutex<Option<MockRequest>>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub model: String,
    pub system: String,
    pub user: String,
}

impl MockBackend {
    pub fn success(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<MockRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn complete(
        &self,
        _api_token: &str,
        model: &str,
        system: &str,
        user: &str,
    ) -> Result<String, ClientError> {
        *self.last_request.lock().unwrap() = Some(MockRequest {
            model: model.to_string(),
            system: system.to_string(),
            user: user.to_string(),
        });
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(message) => Err(ClientError::Api(message.clone())),
        }
    }
}
