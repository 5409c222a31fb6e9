use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// OpenAI credentials loaded from the environment.
///
/// Model, sampling settings, pause, timeout and output path are fixed
/// constants; only the credential and API root come from here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Only required by the summarizing run
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            openai_api_key: lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| openai_client::DEFAULT_BASE_URL.to_string()),
        }
    }

    /// The OpenAI key, or an error explaining it must be set.
    pub fn require_openai_api_key(&self) -> Result<&str> {
        self.openai_api_key
            .as_deref()
            .context("OPENAI_API_KEY must be set")
    }
}
