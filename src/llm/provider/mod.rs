// src/llm/provider/mod.rs
// LLM Provider trait - clean, provider-agnostic interface

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod gemini;

pub use gemini::GeminiProvider;

/// Simple message format for all providers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input: i64,
    pub output: i64,
    pub cached: i64,
}

/// Basic chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub content: String,
    pub model: String,
    pub tokens: TokenUsage,
    pub latency_ms: i64,
}

/// Universal LLM provider interface
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Single request/response completion
    async fn chat(&self, messages: Vec<Message>, system: String) -> Result<Response>;
}

/// Stand-in used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledProvider;

#[async_trait]
impl LlmProvider for DisabledProvider {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn chat(&self, _messages: Vec<Message>, _system: String) -> Result<Response> {
        Err(anyhow!("Generation is disabled: GOOGLE_API_KEY is not set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_provider_always_fails() {
        let result = DisabledProvider
            .chat(vec![Message::user("hello")], String::new())
            .await;
        assert!(result.is_err());
        assert_eq!(DisabledProvider.name(), "disabled");
    }
}
