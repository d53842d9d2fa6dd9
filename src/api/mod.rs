// src/api/mod.rs
// HTTP surface: router composition, errors, extractors

pub mod error;
pub mod extract;
pub mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;
use http::{
    create_assistant_router, create_auth_router, create_catalog_router, create_itinerary_router,
    health_check,
};

/// Full application router: `/health` plus everything under `/api`
pub fn router(app_state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(create_catalog_router())
        .merge(create_itinerary_router())
        .merge(create_assistant_router())
        .nest("/auth", create_auth_router());

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}
