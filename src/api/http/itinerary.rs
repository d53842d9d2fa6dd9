// src/api/http/itinerary.rs
// Prompt preview and itinerary generation

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::api::extract::AuthUser;
use crate::persona::{self, Persona};
use crate::prompt::{compile, trip_duration};
use crate::state::AppState;
use crate::wizard::{FREE_INPUT_REQUIRED, TripPreferences};

pub fn create_itinerary_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/itinerary/prompt", post(preview_prompt))
        .route("/itinerary", post(generate_itinerary))
}

#[derive(Debug, Deserialize)]
pub struct ItineraryRequest {
    #[serde(default)]
    pub preferences: TripPreferences,
    /// Overrides `preferences.selectedPersona` when present
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub duration: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub prompt: String,
    pub itinerary: String,
}

fn resolve_persona(req: &ItineraryRequest) -> ApiResult<Option<&'static Persona>> {
    match req.persona.as_deref().map(str::trim) {
        Some("") | None => Ok(req.preferences.selected_persona.map(|id| id.persona())),
        Some(raw) => persona::lookup(raw)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("Unknown persona: {raw}"))),
    }
}

async fn preview_prompt(
    body: Result<Json<ItineraryRequest>, JsonRejection>,
) -> ApiResult<Json<PromptResponse>> {
    let Json(req) = body?;
    let persona = resolve_persona(&req)?;

    Ok(Json(PromptResponse {
        prompt: compile(&req.preferences, persona),
        duration: trip_duration(&req.preferences.date_range),
    }))
}

async fn generate_itinerary(
    State(app_state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    body: Result<Json<ItineraryRequest>, JsonRejection>,
) -> ApiResult<Json<ItineraryResponse>> {
    let Json(req) = body?;
    if req.preferences.freeform_notes.trim().is_empty() {
        return Err(ApiError::bad_request(FREE_INPUT_REQUIRED));
    }

    let persona = resolve_persona(&req)?;
    let prompt = compile(&req.preferences, persona);
    debug!("Generating itinerary for user {}", user.id);

    let itinerary = app_state
        .itinerary_service
        .submit(&user.id, &prompt)
        .await?;

    Ok(Json(ItineraryResponse { prompt, itinerary }))
}
