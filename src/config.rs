// src/config.rs
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<String>,
    pub assistant_id: Option<String>,
    pub base_url: String,
    pub poll_interval: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty(env::var("OPENAI_API_KEY").ok()),
            assistant_id: non_empty(env::var("ASSISTANT_ID").ok()),
            base_url: non_empty(env::var("OPENAI_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            poll_interval: Duration::from_secs(1),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
