// src/api/http/assistant.rs
// Destination recommendations and travel-assistant chat

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::extract::AuthUser;
use crate::llm::Message;
use crate::state::AppState;

pub fn create_assistant_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations", post(recommend))
        .route("/chat", get(chat_intro).post(chat))
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub time_of_year: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub destinations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<Message>,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatIntroResponse {
    pub greeting: String,
    pub examples: Vec<String>,
}

async fn recommend(
    State(app_state): State<Arc<AppState>>,
    _user: AuthUser,
    body: Result<Json<RecommendationRequest>, JsonRejection>,
) -> ApiResult<Json<RecommendationResponse>> {
    let Json(req) = body?;
    let destinations = app_state
        .recommendation_service
        .recommend(&req.interests, &req.budget, &req.time_of_year)
        .await?;

    Ok(Json(RecommendationResponse { destinations }))
}

/// Opening message and sample questions; no login needed
async fn chat_intro(State(app_state): State<Arc<AppState>>) -> Json<ChatIntroResponse> {
    let chat = &app_state.chat_service;
    Json(ChatIntroResponse {
        greeting: chat.greeting().to_string(),
        examples: chat
            .example_questions()
            .iter()
            .map(|q| q.to_string())
            .collect(),
    })
}

async fn chat(
    State(app_state): State<Arc<AppState>>,
    _user: AuthUser,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResponse>> {
    let Json(req) = body?;
    let reply = app_state
        .chat_service
        .reply(req.history, &req.message)
        .await?;

    Ok(Json(ChatResponse { reply }))
}
