// src/services/chat_client.rs
use reqwest::Client;
use tracing::{error, info, warn};

use crate::config::{ApiConfig, DEFAULT_USER_ID};
use crate::error::ClientError;
use crate::message::{ChatRequest, ChatResponse, ServerStatus};
use crate::services::context::ContextTag;

/// What the user sees whenever the API cannot be reached for any reason.
pub const OFFLINE_FALLBACK: &str = "Connection Error: Babaru is offline.";

#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    config: ApiConfig,
    user_id: String,
}

impl ChatClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Send one message and never fail: any error is logged and replaced
    /// with the offline fallback. The context tag is detected from the
    /// message itself.
    pub async fn speak(&self, message: &str) -> String {
        let context = ContextTag::detect(message);
        match self.send(message, context).await {
            Ok(reply) => reply.response,
            Err(err) => {
                error!("error talking to Babaru: {err}");
                OFFLINE_FALLBACK.to_string()
            }
        }
    }

    /// One POST to /v1/chat. Surfaces the failure taxonomy for callers
    /// that care which way it went wrong.
    pub async fn send(
        &self,
        message: &str,
        context: ContextTag,
    ) -> Result<ChatResponse, ClientError> {
        let request = ChatRequest {
            user_id: self.user_id.clone(),
            message: message.to_string(),
            context: context.as_str().to_string(),
        };

        let response = self
            .client
            .post(self.config.chat_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::RequestFailed(status));
        }

        let body = response.text().await?;
        let reply: ChatResponse = serde_json::from_str(&body)?;

        info!("Babaru says: {}", reply.response);
        match reply.audio_kb() {
            Some(kb) => info!("jukebox audio received, {kb:.2} KB"),
            None => warn!("no audio in response, check server logs"),
        }

        Ok(reply)
    }

    /// GET the root status endpoint.
    pub async fn ping(&self) -> Result<ServerStatus, ClientError> {
        let response = self.client.get(self.config.status_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::RequestFailed(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
