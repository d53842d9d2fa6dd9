// src/llm/mod.rs
// Generation client: provider-agnostic trait plus the Gemini implementation

pub mod provider;

pub use provider::{DisabledProvider, GeminiProvider, LlmProvider, Message, Response, TokenUsage};

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::llm::GeminiConfig;

/// Build the provider for the configured model. Without an API key the
/// returned provider fails every request, so prompt previews still work.
pub fn provider_from_config(config: &GeminiConfig) -> anyhow::Result<Arc<dyn LlmProvider>> {
    if !config.is_enabled() {
        warn!("GOOGLE_API_KEY not set - itinerary generation is disabled");
        return Ok(Arc::new(DisabledProvider));
    }

    let provider = GeminiProvider::from_config(config)?;
    info!("Gemini provider ready (model: {})", provider.model());
    Ok(Arc::new(provider))
}
