// src/llm/provider/gemini/response.rs
// Response parsing helpers for Gemini provider

use anyhow::{Result, anyhow};
use serde_json::Value;
use tracing::info;

use crate::llm::provider::TokenUsage;

/// First candidate, or an error naming the block reason when the prompt was
/// rejected
pub fn extract_first_candidate(response: &Value) -> Result<&Value> {
    if let Some(candidate) = response.get("candidates").and_then(|c| c.get(0)) {
        return Ok(candidate);
    }

    let reason = response
        .get("promptFeedback")
        .and_then(|f| f.get("blockReason"))
        .and_then(|r| r.as_str());

    match reason {
        Some(reason) => Err(anyhow!("Gemini blocked the prompt: {}", reason)),
        None => Err(anyhow!("No candidates in Gemini response")),
    }
}

/// Concatenate every text part of a candidate
pub fn extract_text_content(candidate: &Value) -> String {
    candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                .collect::<String>()
        })
        .unwrap_or_default()
}

pub fn extract_token_usage(response: &Value) -> TokenUsage {
    let usage = response.get("usageMetadata");
    let count = |key: &str| {
        usage
            .and_then(|u| u.get(key))
            .and_then(|t| t.as_i64())
            .unwrap_or(0)
    };

    TokenUsage {
        input: count("promptTokenCount"),
        output: count("candidatesTokenCount"),
        cached: count("cachedContentTokenCount"),
    }
}

pub fn log_token_usage(label: &str, tokens: &TokenUsage) {
    if tokens.cached > 0 {
        info!(
            "{}: {} input ({} cached), {} output",
            label, tokens.input, tokens.cached, tokens.output
        );
    } else {
        info!(
            "{}: {} input tokens, {} output tokens",
            label, tokens.input, tokens.output
        );
    }
}
