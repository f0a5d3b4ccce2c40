pub mod config;
pub mod documents;
pub mod generate;
pub mod health;
pub mod models;
pub mod spec;
pub mod templates;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use specforge_client::ChatClient;
use specforge_service::{ServiceError, SpecService};

pub struct InnerAppState {
    pub service: SpecService,
    /// Direct client for the model listing proxy; generation goes through
    /// the service's backend.
    pub chat: ChatClient,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(config::routes())
        .merge(documents::routes())
        .merge(templates::routes())
        .merge(spec::routes())
        .merge(generate::routes())
        .merge(models::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub(crate) fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotConfigured(_) => StatusCode::CONFLICT,
        ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": e.to_string() })))
}
