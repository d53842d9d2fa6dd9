// src/api/http/health.rs

use axum::{Json, extract::State};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::state::AppState;

pub async fn health_check(State(app_state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "alive",
        "provider": app_state.provider_name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
