// src/services/relay.rs
use std::time::Duration;

use crate::services::openai::{CompletionMessage, OpenAiClient, UpstreamError};

pub const MODEL: &str = "gpt-3.5-turbo";

pub const SYSTEM_PROMPT: &str = "You are GreenLazy, an eco-friendly AI assistant. \
Be helpful, relaxed, and care about the environment. Use leaf emojis 🌿";

pub const FALLBACK_REPLY: &str = "I couldn't generate a response. Try again! 🌿";

const MAX_POLL_ATTEMPTS: u32 = 10;

/// Forwards a user message to OpenAI and returns the generated reply.
///
/// With an assistant id configured it drives the thread/run lifecycle;
/// otherwise it issues a single chat completion with the fixed persona.
#[derive(Clone)]
pub struct ChatRelay {
    client: OpenAiClient,
    assistant_id: Option<String>,
    poll_interval: Duration,
}

impl ChatRelay {
    pub fn new(
        client: OpenAiClient,
        assistant_id: Option<String>,
        poll_interval: Duration,
    ) -> Self {
        Self { client, assistant_id, poll_interval }
    }

    pub async fn reply(&self, message: &str) -> Result<String, UpstreamError> {
        match &self.assistant_id {
            Some(assistant_id) => self.assistant_reply(assistant_id, message).await,
            None => self.direct_reply(message).await,
        }
    }

    async fn assistant_reply(
        &self,
        assistant_id: &str,
        message: &str,
    ) -> Result<String, UpstreamError> {
        let thread = self.client.create_thread().await?;
        self.client.create_message(&thread.id, "user", message).await?;
        let run = self.client.create_run(&thread.id, assistant_id).await?;

        // Bounded poll: up to 10 attempts, 1s apart, no backoff. If the run is
        // still in progress after that we read the thread anyway.
        let mut attempts = 0;
        loop {
            tokio::time::sleep(self.poll_interval).await;
            let status = self.client.retrieve_run(&thread.id, &run.id).await?;
            attempts += 1;
            if status.status != "in_progress" || attempts >= MAX_POLL_ATTEMPTS {
                break;
            }
        }

        let messages = self.client.list_messages(&thread.id).await?;
        let reply = messages
            .data
            .iter()
            .find(|msg| msg.role == "assistant")
            .and_then(|msg| msg.content.first())
            .and_then(|block| block.text.as_ref())
            .map(|text| text.value.clone())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());

        Ok(reply)
    }

    async fn direct_reply(&self, message: &str) -> Result<String, UpstreamError> {
        let messages = [
            CompletionMessage { role: "system".to_string(), content: SYSTEM_PROMPT.to_string() },
            CompletionMessage { role: "user".to_string(), content: message.to_string() },
        ];

        let completion = self.client.create_chat_completion(MODEL, &messages).await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(UpstreamError::MissingReply)
    }
}
