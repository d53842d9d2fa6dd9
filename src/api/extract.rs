// src/api/extract.rs
// Bearer-token extractor for protected routes

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::User;
use crate::state::AppState;

/// The account behind a valid `Authorization: Bearer <token>` header
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

pub fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

        let user = state.auth_service.verify(token).await?;
        Ok(AuthUser(user))
    }
}
