// src/llm/provider/gemini/mod.rs
// Gemini provider using Google AI generateContent API

mod conversion;
mod response;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

use super::{LlmProvider, Message, Response};
use crate::config::llm::GeminiConfig;

pub use conversion::{build_request_body, messages_to_gemini_contents};
use response::{extract_first_candidate, extract_text_content, extract_token_usage, log_token_usage};

/// Gemini provider using Google AI API
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self> {
        if api_key.is_empty() {
            return Err(anyhow!("Google API key is required"));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(GeminiProvider {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
        })
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            config.base_url.clone(),
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the API URL for a given method. The key goes in the
    /// `x-goog-api-key` header, never the URL.
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }

    /// Parse regular chat response
    fn parse_response(&self, response: Value, latency_ms: i64) -> Result<Response> {
        let candidate = extract_first_candidate(&response)?;
        let content = extract_text_content(candidate);
        let tokens = extract_token_usage(&response);

        log_token_usage("Gemini response", &tokens);

        Ok(Response {
            content,
            model: self.model.clone(),
            tokens,
            latency_ms,
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn chat(&self, messages: Vec<Message>, system: String) -> Result<Response> {
        let start = Instant::now();
        debug!(
            "Sending request to Gemini ({}) with {} messages",
            self.model,
            messages.len()
        );

        let request_body = build_request_body(&messages, &system, self.temperature);

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| anyhow!("Gemini request failed: {}", e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Gemini API returned {}: {}", status, error_text));
        }

        let response_body: Value = response.json().await?;
        let latency_ms = start.elapsed().as_millis() as i64;

        self.parse_response(response_body, latency_ms)
    }
}
