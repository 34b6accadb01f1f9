// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::openai::OpenAiClient;
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Present only when an API key is configured; requests fail with a
    /// configuration error otherwise.
    pub relay: Option<ChatRelay>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let relay = config.api_key.as_ref().map(|key| {
            let client = OpenAiClient::new(&config.base_url, key);
            ChatRelay::new(client, config.assistant_id.clone(), config.poll_interval)
        });
        Self { relay }
    }
}
