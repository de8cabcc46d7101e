//! Client for the external OpenAI-compatible chat-completions API.
//!
//! Two services ride on the same endpoint: single-contract analysis
//! ([`analyzer`]) and comparison summarization ([`summarizer`]). Both make
//! exactly one attempt with no retry; callers own the degradation policy.

pub mod analyzer;
pub mod chat;
pub mod error;
pub mod summarizer;

pub use error::{LlmError, LlmResult};

use std::time::Duration;

/// Configuration for the LLM endpoint.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl LlmConfig {
    /// Defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read configuration from the environment. Returns `None` when no
    /// `OPENAI_API_KEY` is set; the service then runs fallback-only.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok()?;
        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Some(secs) = std::env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Chat-completions client.
#[derive(Clone)]
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LlmConfig::new("sk-test")
            .with_base_url("http://localhost:9000/v1")
            .with_model("test-model");

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "test-model");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
