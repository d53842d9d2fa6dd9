// src/api/http/wizard.rs
// Read-only catalogs the front end renders: steps, personas, offers

use axum::{
    Json, Router,
    extract::{Query, rejection::QueryRejection},
    routing::get,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::affiliate::{self, AffiliateOffer};
use crate::api::error::ApiResult;
use crate::persona::{self, Persona};
use crate::state::AppState;
use crate::wizard::{StepDefinition, steps};

pub fn create_catalog_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wizard/steps", get(list_steps))
        .route("/personas", get(list_personas))
        .route("/affiliate", get(list_offers))
}

async fn list_steps() -> Json<&'static [StepDefinition]> {
    Json(steps())
}

async fn list_personas() -> Json<&'static [Persona]> {
    Json(persona::all())
}

#[derive(Debug, Deserialize)]
struct AffiliateQuery {
    #[serde(default)]
    persona: Option<String>,
}

async fn list_offers(
    query: Result<Query<AffiliateQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<AffiliateOffer>>> {
    let Query(query) = query?;
    let offers = query
        .persona
        .as_deref()
        .map(affiliate::offers_for)
        .unwrap_or_default();
    Ok(Json(offers))
}
