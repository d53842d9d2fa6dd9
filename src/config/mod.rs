// src/config/mod.rs
// Central configuration for Sardin.ai - composed from environment variables

pub mod auth;
pub mod helpers;
pub mod llm;
pub mod server;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: SardinaiConfig = SardinaiConfig::from_env();
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SardinaiConfig {
    pub gemini: llm::GeminiConfig,
    pub server: server::ServerConfig,
    pub logging: server::LoggingConfig,
    pub auth: auth::AuthConfig,
}

impl SardinaiConfig {
    pub fn from_env() -> Self {
        // Load .env file
        dotenvy::dotenv().ok(); // Don't fail if .env doesn't exist (for production)

        Self {
            gemini: llm::GeminiConfig::from_env(),
            server: server::ServerConfig::from_env(),
            logging: server::LoggingConfig::from_env(),
            auth: auth::AuthConfig::from_env(),
        }
    }

    /// Validate config on startup
    pub fn validate(&self) -> anyhow::Result<()> {
        self.gemini.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }
}
