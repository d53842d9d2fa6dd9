// src/api/http/auth.rs

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::state::AppState;

pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/verify", post(verify))
        .route("/logout", post(logout))
}

async fn login(
    State(app_state): State<Arc<AppState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = body?;
    let response = app_state.auth_service.login(req).await?;
    Ok(Json(response))
}

async fn register(
    State(app_state): State<Arc<AppState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = body?;
    let response = app_state.auth_service.register(req).await?;
    Ok(Json(response))
}

#[derive(Deserialize)]
struct VerifyRequest {
    token: String,
}

#[derive(Serialize)]
struct VerifyResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

async fn verify(
    State(app_state): State<Arc<AppState>>,
    body: Result<Json<VerifyRequest>, JsonRejection>,
) -> ApiResult<Json<VerifyResponse>> {
    let Json(req) = body?;
    let response = match app_state.auth_service.verify(&req.token).await {
        Ok(user) => VerifyResponse {
            valid: true,
            user_id: Some(user.id),
            email: Some(user.email),
        },
        Err(_) => VerifyResponse {
            valid: false,
            user_id: None,
            email: None,
        },
    };
    Ok(Json(response))
}

/// Tokens are stateless; the client drops its copy
async fn logout() -> Json<Value> {
    Json(json!({ "success": true }))
}
