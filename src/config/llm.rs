// src/config/llm.rs
// Gemini generation configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Empty disables generation; the wizard and prompt preview still work
    #[serde(skip_serializing)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_or("GOOGLE_API_KEY", ""),
            model: super::helpers::env_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url: super::helpers::env_or("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            temperature: super::helpers::env_parsed("GEMINI_TEMPERATURE", 1.0),
            timeout_secs: super::helpers::env_parsed("GEMINI_TIMEOUT_SECS", 60),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(anyhow::anyhow!(
                "GEMINI_TEMPERATURE must be between 0.0 and 2.0"
            ));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("GEMINI_TIMEOUT_SECS must be greater than 0"));
        }

        if self.model.trim().is_empty() {
            return Err(anyhow::anyhow!("GEMINI_MODEL cannot be empty"));
        }

        Ok(())
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: 1.0,
            timeout_secs: 60,
        }
    }
}
