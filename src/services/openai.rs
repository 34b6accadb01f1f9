// src/services/openai.rs
//
// Thin reqwest client for the OpenAI chat-completion and assistants APIs.
// Only the handful of operations the relay needs are implemented.

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

const ASSISTANTS_BETA_HEADER: (&str, &str) = ("OpenAI-Beta", "assistants=v2");

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("completion contained no reply")]
    MissingReply,
}

#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletion {
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: CompletionReply,
}

#[derive(Debug, Deserialize)]
pub struct CompletionReply {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Thread {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ThreadMessageList {
    pub data: Vec<ThreadMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ThreadMessage {
    pub role: String,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub text: Option<MessageText>,
}

#[derive(Debug, Deserialize)]
pub struct MessageText {
    pub value: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn create_chat_completion(
        &self,
        model: &str,
        messages: &[CompletionMessage],
    ) -> Result<ChatCompletion, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({ "model": model, "messages": messages }))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_thread(&self) -> Result<Thread, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/threads", self.base_url))
            .bearer_auth(&self.api_key)
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
            .json(&json!({}))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_message(
        &self,
        thread_id: &str,
        role: &str,
        content: &str,
    ) -> Result<ThreadMessage, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/threads/{thread_id}/messages", self.base_url))
            .bearer_auth(&self.api_key)
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
            .json(&json!({ "role": role, "content": content }))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
    ) -> Result<Run, UpstreamError> {
        let response = self
            .http
            .post(format!("{}/threads/{thread_id}/runs", self.base_url))
            .bearer_auth(&self.api_key)
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
            .json(&json!({ "assistant_id": assistant_id }))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn retrieve_run(
        &self,
        thread_id: &str,
        run_id: &str,
    ) -> Result<Run, UpstreamError> {
        let response = self
            .http
            .get(format!("{}/threads/{thread_id}/runs/{run_id}", self.base_url))
            .bearer_auth(&self.api_key)
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn list_messages(
        &self,
        thread_id: &str,
    ) -> Result<ThreadMessageList, UpstreamError> {
        let response = self
            .http
            .get(format!("{}/threads/{thread_id}/messages", self.base_url))
            .bearer_auth(&self.api_key)
            .header(ASSISTANTS_BETA_HEADER.0, ASSISTANTS_BETA_HEADER.1)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api { status: status.as_u16(), message });
        }
        Ok(response.json().await?)
    }
}
