use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use specforge_core::Config;

use super::{to_error, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/config", get(get_config).put(put_config))
}

async fn get_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.service.config().await))
}

async fn put_config(
    State(state): State<AppState>,
    Json(config): Json<Config>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    state
        .service
        .set_config(config)
        .await
        .map(|c| Json(json!(c)))
        .map_err(to_error)
}
