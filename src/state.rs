// src/state.rs
// Shared server state: generation services and accounts

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    auth::{AuthService, InMemoryUserRepository},
    config::SardinaiConfig,
    llm::{self, LlmProvider},
    services::{ChatService, ItineraryService, RecommendationService},
};

#[derive(Clone)]
pub struct AppState {
    // -------- Generation --------
    pub provider_name: &'static str,
    pub itinerary_service: Arc<ItineraryService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub chat_service: Arc<ChatService>,

    // -------- Accounts --------
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wire every service to one provider
    pub fn new(provider: Arc<dyn LlmProvider>, auth_service: Arc<AuthService>) -> Self {
        Self {
            provider_name: provider.name(),
            itinerary_service: Arc::new(ItineraryService::new(provider.clone())),
            recommendation_service: Arc::new(RecommendationService::new(provider.clone())),
            chat_service: Arc::new(ChatService::new(provider)),
            auth_service,
        }
    }

    pub async fn from_config(config: &SardinaiConfig) -> anyhow::Result<Self> {
        let provider = llm::provider_from_config(&config.gemini)?;

        if config.auth.uses_dev_secret() {
            warn!("JWT_SECRET not set - using the development secret");
        }
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            &config.auth,
        ));
        if config.auth.seed_demo_user {
            auth_service.seed_demo_user().await?;
            info!("Demo account available: {}", crate::auth::DEMO_EMAIL);
        }

        Ok(Self::new(provider, auth_service))
    }
}
